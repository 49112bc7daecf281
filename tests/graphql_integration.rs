//! Integration tests against a live GraphQL endpoint.
//!
//! These tests require a reachable endpoint. Run with:
//! `POLITIGRAPH_GRAPHQL_ENDPOINT=... cargo test --features integration --test graphql_integration`
//!
//! Write (merge) tests additionally require `POLITIGRAPH_GRAPHQL_TOKEN`
//! and skip themselves when it is absent, so read-only environments can
//! still exercise the read paths.

#![cfg(feature = "integration")]

use politigraph::config::Config;
use politigraph::graphql::GraphqlClient;
use politigraph::idgen::idgen;
use politigraph::models::{Bill, Committee, LocalDateTime, Minutes, News, Speech, Url};
use politigraph::schema::Registry;
use serial_test::serial;

fn create_client() -> GraphqlClient {
    let config = Config::load().expect("Failed to load config");
    GraphqlClient::from_config(&config).expect("Failed to build client")
}

/// Returns false (and says so) when no write credential is configured.
fn writable(client: &GraphqlClient) -> bool {
    if client.can_write() {
        true
    } else {
        eprintln!("skipping: POLITIGRAPH_GRAPHQL_TOKEN not configured");
        false
    }
}

fn sample_bill() -> Bill {
    let mut bill = Bill::new();
    bill.name = Some("公文書等の管理に関する法律の一部を改正する法律案".to_string());
    bill.bill_number = Some("第195回衆法第4号".to_string());
    bill.submitted_date = Some(LocalDateTime::ymd(2020, 1, 1));
    bill.extras.insert(
        "invalid_field".to_string(),
        serde_json::json!("このfieldはmergeに使われない"),
    );
    bill.id = Some(idgen(Registry::global(), &bill).unwrap());
    bill
}

fn sample_url() -> Url {
    let mut url = Url::new();
    url.url = Some(
        "http://www.shugiin.go.jp/internet/itdb_gian.nsf/html/gian/honbun/g19505004.htm"
            .to_string(),
    );
    url.id = Some(idgen(Registry::global(), &url).unwrap());
    url
}

fn sample_news() -> News {
    let mut news = News::new();
    news.url = Some("https://www.nikkei.com/article/DGXMZO64119940S0A920C2000000/".to_string());
    news.id = Some(idgen(Registry::global(), &news).unwrap());
    news
}

fn sample_minutes() -> Minutes {
    let mut minutes = Minutes::new();
    minutes.name = Some("第201回国会衆議院環境委員会第4号".to_string());
    minutes.topics = Some(vec!["天気について".to_string(), "カレーライスの件".to_string()]);
    minutes.id = Some(idgen(Registry::global(), &minutes).unwrap());
    minutes
}

fn sample_speech() -> Speech {
    let mut speech = Speech::new();
    speech.name = Some("第201回国会衆議院環境委員会第4号3".to_string());
    speech.id = Some(idgen(Registry::global(), &speech).unwrap());
    speech
}

fn sample_committee() -> Committee {
    let mut committee = Committee::new();
    committee.name = Some("衆議院環境委員会".to_string());
    committee.topics = Some(vec!["環境省の所管に属する事項".to_string()]);
    committee.id = Some(idgen(Registry::global(), &committee).unwrap());
    committee
}

// Write tests merge into the shared store, so everything runs serially.
#[serial]
mod endpoint_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_bills() {
        let client = create_client();
        let body = client
            .fetch_all("Bill", &["name", "billNumber"])
            .await
            .expect("List query failed");
        assert!(body["data"]["Bill"].is_array());
    }

    #[tokio::test]
    async fn test_merge_bill_is_idempotent() {
        let client = create_client();
        if !writable(&client) {
            return;
        }

        let bill = sample_bill();
        let first = client.merge(&bill).await.expect("Merge failed");
        assert_eq!(
            first["data"]["MergeBill"]["id"].as_str(),
            bill.id.as_deref()
        );

        // Same content, same id: the second merge must hit the same node.
        let again = client.merge(&bill).await.expect("Re-merge failed");
        assert_eq!(
            again["data"]["MergeBill"]["id"].as_str(),
            bill.id.as_deref()
        );
    }

    #[tokio::test]
    async fn test_merge_url_referred_bills() {
        let client = create_client();
        if !writable(&client) {
            return;
        }

        let url = sample_url();
        let bill = sample_bill();
        let view = client
            .exec_merge_url_referred_bills(url.id.as_deref().unwrap(), bill.id.as_deref().unwrap())
            .await
            .expect("Relationship merge failed");
        assert_eq!(Some(view.from.id.as_str()), url.id.as_deref());
        assert_eq!(Some(view.to.id.as_str()), bill.id.as_deref());
    }

    #[tokio::test]
    async fn test_merge_news_referred_bills() {
        let client = create_client();
        if !writable(&client) {
            return;
        }

        let news = sample_news();
        let bill = sample_bill();
        let view = client
            .exec_merge_news_referred_bills(news.id.as_deref().unwrap(), bill.id.as_deref().unwrap())
            .await
            .expect("Relationship merge failed");
        assert_eq!(Some(view.from.id.as_str()), news.id.as_deref());
        assert_eq!(Some(view.to.id.as_str()), bill.id.as_deref());
    }

    #[tokio::test]
    async fn test_merge_speech_belonged_to_minutes() {
        let client = create_client();
        if !writable(&client) {
            return;
        }

        let speech = sample_speech();
        let minutes = sample_minutes();
        let view = client
            .exec_merge_speech_belonged_to_minutes(
                speech.id.as_deref().unwrap(),
                minutes.id.as_deref().unwrap(),
            )
            .await
            .expect("Relationship merge failed");
        assert_eq!(Some(view.from.id.as_str()), speech.id.as_deref());
        assert_eq!(Some(view.to.id.as_str()), minutes.id.as_deref());
    }

    #[tokio::test]
    async fn test_merge_minutes_discussed_bills() {
        let client = create_client();
        if !writable(&client) {
            return;
        }

        let minutes = sample_minutes();
        let bill = sample_bill();
        let view = client
            .exec_merge_minutes_discussed_bills(
                minutes.id.as_deref().unwrap(),
                bill.id.as_deref().unwrap(),
            )
            .await
            .expect("Relationship merge failed");
        assert_eq!(Some(view.from.id.as_str()), minutes.id.as_deref());
        assert_eq!(Some(view.to.id.as_str()), bill.id.as_deref());
    }

    #[tokio::test]
    async fn test_merge_minutes_belonged_to_committee() {
        let client = create_client();
        if !writable(&client) {
            return;
        }

        let minutes = sample_minutes();
        let committee = sample_committee();
        let view = client
            .exec_merge_minutes_belonged_to_committee(
                minutes.id.as_deref().unwrap(),
                committee.id.as_deref().unwrap(),
            )
            .await
            .expect("Relationship merge failed");
        assert_eq!(Some(view.from.id.as_str()), minutes.id.as_deref());
        assert_eq!(Some(view.to.id.as_str()), committee.id.as_deref());
    }
}
