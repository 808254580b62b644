//! Full CRUD lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every build/parse
//! pair over real HTTP using ureq. Validates that request building and
//! response parsing work end-to-end with the actual server, independent of
//! the async service layer.

use hero_core::{ApiError, Hero, HeroClient, HttpMethod, HttpResponse, NewHero};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the client
/// handle status interpretation.
fn execute(req: hero_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

#[test]
fn crud_lifecycle() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    let client = HeroClient::new(&format!("http://{addr}"));

    // Step 2: list — should be empty.
    let req = client.build_list_heroes();
    let heroes = client.parse_list_heroes(execute(req)).unwrap();
    assert!(heroes.is_empty(), "expected empty list");

    // Step 3: add a hero; the store assigns 11 first.
    let input = NewHero {
        name: "Windstorm".to_string(),
    };
    let req = client.build_add_hero(&input).unwrap();
    let created = client.parse_add_hero(execute(req)).unwrap();
    assert_eq!(created.name, "Windstorm");
    assert_eq!(created.id, 11);
    let id = created.id;

    // Step 4: get the created hero.
    let req = client.build_get_hero(id);
    let fetched = client.parse_get_hero(execute(req)).unwrap();
    assert_eq!(fetched, created);

    // Step 5: tolerant find via the id filter.
    let req = client.build_find_hero(id);
    let found = client.parse_find_hero(execute(req)).unwrap();
    assert_eq!(found, Some(created.clone()));

    // Step 6: tolerant find of a missing id — empty, not an error.
    let req = client.build_find_hero(99);
    let found = client.parse_find_hero(execute(req)).unwrap();
    assert!(found.is_none());

    // Step 7: search by name fragment, case-insensitively.
    let req = client.build_search_heroes("WIND");
    let matches = client.parse_search_heroes(execute(req)).unwrap();
    assert_eq!(matches.len(), 1);
    let req = client.build_search_heroes("zzz");
    let matches = client.parse_search_heroes(execute(req)).unwrap();
    assert!(matches.is_empty());

    // Step 8: update the name.
    let renamed = Hero {
        id,
        name: "Gale Force".to_string(),
    };
    let req = client.build_update_hero(&renamed).unwrap();
    let updated = client.parse_update_hero(execute(req)).unwrap();
    assert_eq!(updated, renamed);

    // Step 9: list — should have one item.
    let req = client.build_list_heroes();
    let heroes = client.parse_list_heroes(execute(req)).unwrap();
    assert_eq!(heroes.len(), 1);

    // Step 10: delete.
    let req = client.build_delete_hero(id);
    client.parse_delete_hero(execute(req)).unwrap();

    // Step 11: get after delete — should be NotFound.
    let req = client.build_get_hero(id);
    let err = client.parse_get_hero(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 12: delete again — should be NotFound.
    let req = client.build_delete_hero(id);
    let err = client.parse_delete_hero(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 13: list — should be empty again.
    let req = client.build_list_heroes();
    let heroes = client.parse_list_heroes(execute(req)).unwrap();
    assert!(heroes.is_empty(), "expected empty list after delete");
}
