//! Tests for manga actions.

mod common;

use common::{client, mock_error, mock_json, received_query_param, setup_mock_server};
use malkit::types::{MangaListUpdate, MangaRankingType, MangaStatus};
use malkit::{Error, Fields, Resource};
use wiremock::matchers::{body_string, method, path, query_param, query_param_is_missing};
use wiremock::Mock;

fn manga_node(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "main_picture": {
            "medium": format!("https://cdn.myanimelist.net/images/manga/{id}.jpg"),
            "large": format!("https://cdn.myanimelist.net/images/manga/{id}l.jpg")
        }
    })
}

#[tokio::test]
async fn test_search_manga() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/manga"))
        .and(query_param("q", "berserk"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .and(query_param("fields", Resource::Manga.default_fields()))
        .respond_with(mock_json(serde_json::json!({
            "data": [{"node": manga_node(2, "Berserk")}],
            "paging": {"previous": "https://api.myanimelist.net/v2/manga?offset=5"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server).manga().search("berserk", 5, 10).await.unwrap();

    assert_eq!(page.data[0].node.title, "Berserk");
    assert!(!page.paging.has_next());
    assert!(page.paging.previous.is_some());
}

#[tokio::test]
async fn test_search_clamps_limit() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/manga"))
        .respond_with(mock_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    client(&server).manga().search("berserk", 101, 0).await.unwrap();

    assert_eq!(received_query_param(&server, "limit").await.as_deref(), Some("100"));
}

#[tokio::test]
async fn test_manga_details() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/manga/2"))
        .respond_with(mock_json(serde_json::json!({
            "id": 2,
            "title": "Berserk",
            "mean": 9.47,
            "media_type": "manga",
            "status": "currently_publishing",
            "num_volumes": 0,
            "num_chapters": 0,
            "authors": [
                {"node": {"id": 1868, "first_name": "Kentarou", "last_name": "Miura"}, "role": "Story & Art"}
            ],
            "serialization": [
                {"node": {"id": 2, "name": "Young Animal"}, "role": ""}
            ],
            "my_list_status": {"status": "reading", "is_rereading": false, "num_volumes_read": 3, "num_chapters_read": 30, "score": 10}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let manga = client(&server).manga().details(2).await.unwrap();

    assert_eq!(manga.authors[0].node.last_name, "Miura");
    assert_eq!(manga.authors[0].role, "Story & Art");
    assert_eq!(manga.serialization[0].node.name, "Young Animal");
    assert_eq!(manga.num_chapters, Some(0));
    assert!(manga.genres.is_empty());

    let list = manga.my_list_status.unwrap();
    assert_eq!(list.status, Some(MangaStatus::Reading));
    assert_eq!(list.num_chapters_read, 30);
}

#[tokio::test]
async fn test_details_with_custom_fields() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/manga/2"))
        .and(query_param("fields", "title,mean"))
        .respond_with(mock_json(serde_json::json!({"id": 2, "title": "Berserk", "mean": 9.47})))
        .expect(1)
        .mount(&server)
        .await;

    let manga = client(&server)
        .manga()
        .details_with_fields(2, &Fields::only(["title", "mean"]))
        .await
        .unwrap();
    assert_eq!(manga.mean, Some(9.47));
}

#[tokio::test]
async fn test_details_with_omitted_fields() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/manga/2"))
        .and(query_param_is_missing("fields"))
        .respond_with(mock_json(serde_json::json!({"id": 2, "title": "Berserk"})))
        .expect(1)
        .mount(&server)
        .await;

    let manga = client(&server)
        .manga()
        .details_with_fields(2, &Fields::Omit)
        .await
        .unwrap();
    assert_eq!(manga.id, 2);
}

#[tokio::test]
async fn test_manga_ranking() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/manga/ranking"))
        .and(query_param("ranking_type", "manhwa"))
        .and(query_param("limit", "500"))
        .respond_with(mock_json(serde_json::json!({
            "data": [{"node": manga_node(121496, "Solo Leveling"), "ranking": {"rank": 1}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .manga()
        .ranking(MangaRankingType::Manhwa, 9999, 0)
        .await
        .unwrap();
    assert_eq!(page.data[0].ranking.rank, 1);
}

#[tokio::test]
async fn test_update_list_status() {
    let server = setup_mock_server().await;
    Mock::given(method("PATCH"))
        .and(path("/v2/manga/2/my_list_status"))
        .and(body_string("status=reading&score=10&num_chapters_read=120&reread_value=5"))
        .respond_with(mock_json(serde_json::json!({
            "status": "reading",
            "is_rereading": false,
            "num_volumes_read": 0,
            "num_chapters_read": 120,
            "score": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = MangaListUpdate::new()
        .status(MangaStatus::Reading)
        .score(12)
        .num_chapters_read(120)
        .reread_value(9);
    let status = client(&server)
        .manga()
        .update_list_status(2, &update)
        .await
        .unwrap();
    assert_eq!(status.num_chapters_read, 120);
}

#[tokio::test]
async fn test_delete_list_item() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/manga/2/my_list_status"))
        .respond_with(mock_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/manga/3/my_list_status"))
        .respond_with(mock_error(404, "not_found", ""))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/manga/4/my_list_status"))
        .respond_with(mock_error(403, "forbidden", ""))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.manga().delete_list_item(2).await.unwrap());
    assert!(!client.manga().delete_list_item(3).await.unwrap());
    assert!(matches!(
        client.manga().delete_list_item(4).await,
        Err(Error::Forbidden(_))
    ));
}
