//! Drives the whole pipeline against a canned catalog service on the loopback interface.

use {
    std::{
        fs,
        io::{
            BufRead,
            BufReader,
            Write
        },
        net::{
            TcpListener,
            TcpStream
        },
        thread
    },
    serde_json::json,
    set_finder::{
        deck::read_card_list,
        process::{
            process_cards,
            reorganize_by_set,
            CardResult
        },
        report::{
            render_by_card,
            render_by_set
        },
        scryfall::{
            Client,
            ClientConfig
        }
    }
};

fn respond(path: &str) -> (&'static str, String) {
    match path {
        "/named?exact=Island" => ("200 OK", json!({
            "object": "card",
            "name": "Island",
            "oracle_id": "oracle-island"
        }).to_string()),
        "/named?exact=Plains" => ("200 OK", json!({
            "object": "card",
            "name": "Plains"
        }).to_string()),
        "/named?exact=Black%20Lotus" => ("404 Not Found", json!({
            "object": "error",
            "code": "not_found"
        }).to_string()),
        "/named?exact=Mox%20Pearl" => ("500 Internal Server Error", json!({
            "object": "error",
            "code": "internal"
        }).to_string()),
        "/search?q=oracleid:oracle-island&unique=prints" => ("200 OK", json!({
            "object": "list",
            "data": [
                {"set": "b02", "set_name": "Beta"},
                {"set": "a01", "set_name": "Alpha"},
                {"set": "", "set_name": "Nameless"},
                {"set_name": "Codeless"}
            ]
        }).to_string()),
        _ => ("404 Not Found", json!({"object": "error"}).to_string())
    }
}

fn handle(mut stream: TcpStream) {
    let mut reader = BufReader::new(stream.try_clone().expect("failed to clone stream"));
    let mut request_line = String::default();
    reader.read_line(&mut request_line).expect("failed to read request line");
    loop {
        let mut header = String::default();
        reader.read_line(&mut header).expect("failed to read header");
        if header == "\r\n" || header.is_empty() {
            break;
        }
    }
    let path = request_line.split_whitespace().nth(1).unwrap_or("/").to_owned();
    let (status, body) = respond(&path);
    write!(
        stream,
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    ).expect("failed to write response");
}

fn spawn_catalog() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind listener");
    let base_url = format!("http://{}", listener.local_addr().expect("listener has no local addr"));
    thread::spawn(move || {
        for stream in listener.incoming() {
            handle(stream.expect("bad connection"));
        }
    });
    base_url
}

fn test_client(base_url: String) -> Client {
    Client::new(ClientConfig {
        base_url,
        user_agent: "set-finder-tests".to_owned(),
        accept: "application/json".to_owned()
    }).expect("failed to build client")
}

#[test]
fn finds_sets_for_a_deck_list() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let deck_path = dir.path().join("deck.txt");
    fs::write(&deck_path, "Island\n\n1 Black Lotus (LEA) 233\n2 Mox Pearl\nPlains\n").expect("failed to write deck");
    let card_names = read_card_list(&deck_path).expect("failed to read deck");
    assert_eq!(card_names, ["Island", "Black Lotus", "Mox Pearl", "Plains"]);

    let client = test_client(spawn_catalog());
    let results = process_cards(&client, &card_names);
    assert_eq!(results.len(), 4);
    match &results["Island"] {
        CardResult::Printings(sets) => {
            assert_eq!(sets.len(), 2);
            assert_eq!(sets["A01"], "Alpha");
            assert_eq!(sets["B02"], "Beta");
        }
        other => panic!("expected printings for Island, got {:?}", other)
    }
    assert_eq!(results["Black Lotus"], CardResult::NotFound);
    assert_eq!(results["Mox Pearl"], CardResult::NotFound);
    assert_eq!(results["Plains"], CardResult::NoOracleId);

    let mut buf = Vec::default();
    render_by_card(&mut buf, &results).expect("render failed");
    let report = String::from_utf8(buf).expect("report was not utf-8");
    let island = report.find("Island:").expect("missing Island section");
    let lotus = report.find("Black Lotus:").expect("missing Black Lotus section");
    assert!(island < lotus);
    assert!(report.contains("  A01 - Alpha\n  B02 - Beta\n"));
    assert!(report.contains("  Total: 2 set(s)"));
    assert!(report.contains("  Card not found"));
    assert!(!report.contains("No sets found"));
}

#[test]
fn groups_by_set_across_the_inverted_view() {
    let client = test_client(spawn_catalog());
    let card_names = vec!["Island".to_owned()];
    let results = process_cards(&client, &card_names);
    let sets_to_cards = reorganize_by_set(&results);
    assert_eq!(sets_to_cards.len(), 2);
    assert_eq!(sets_to_cards["A01"].cards, ["Island"]);

    let mut buf = Vec::default();
    render_by_set(&mut buf, &results).expect("render failed");
    let report = String::from_utf8(buf).expect("report was not utf-8");
    let alpha = report.find("A01 - Alpha:").expect("missing Alpha group");
    let beta = report.find("B02 - Beta:").expect("missing Beta group");
    assert!(alpha < beta);
    assert!(report.contains("  - Island"));
    assert!(report.contains("Total sets found: 2"));
}
