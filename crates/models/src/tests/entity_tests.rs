use super::setup_test_db;
use crate::errors::ModelError;
use crate::{client, client_network, network};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, Set};
use uuid::Uuid;

#[tokio::test]
async fn test_client_create_and_duplicate_name() -> Result<()> {
    let db = setup_test_db().await?;

    let created = client::create(&db, "acme").await?;
    assert_eq!(created.name, "acme");

    let err = client::create(&db, "acme").await.unwrap_err();
    assert!(err.is_duplicate_key());
    assert_eq!(err.to_string(), client::DUPLICATE_NAME);

    let all = client::Entity::find().all(&db).await?;
    assert_eq!(all, vec![created]);
    Ok(())
}

#[tokio::test]
async fn test_client_rename_into_taken_name() -> Result<()> {
    let db = setup_test_db().await?;
    client::create(&db, "first").await?;
    let second = client::create(&db, "second").await?;

    let err = client::rename(&db, second.clone(), "first").await.unwrap_err();
    assert!(matches!(err, ModelError::DuplicateKey(_)));

    let renamed = client::rename(&db, second.clone(), "third").await?;
    assert_eq!(renamed.id, second.id);
    assert_eq!(renamed.name, "third");
    Ok(())
}

#[tokio::test]
async fn test_client_rename_of_vanished_row_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let c = client::create(&db, "ghost").await?;
    client::Entity::delete_by_id(c.id).exec(&db).await?;

    let err = client::rename(&db, c, "still ghost").await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
    Ok(())
}

#[test]
fn test_parse_id() {
    let id = Uuid::new_v4();
    assert_eq!(client::parse_id(&id.to_string()), Some(id));
    assert_eq!(client::parse_id(&id.simple().to_string()), Some(id));
    assert_eq!(client::parse_id("not-a-uuid"), None);
    assert_eq!(client::parse_id(""), None);
    assert_eq!(client::parse_id(&format!(" {id} ")), None);
    assert_eq!(client::parse_id(&format!("{id}\n")), None);
}

#[test]
fn test_network_parse_id() {
    assert_eq!(network::parse_id(42), Some(42));
    assert_eq!(network::parse_id(-1), Some(-1));
    assert_eq!(network::parse_id(i64::from(i32::MAX)), Some(i32::MAX));
    assert_eq!(network::parse_id(i64::from(i32::MAX) + 1), None);
    assert_eq!(network::parse_id(i64::from(i32::MIN) - 1), None);
    assert_eq!(network::parse_id(99_999_999_999), None);
}

#[tokio::test]
async fn test_network_null_ipv4_does_not_collide() -> Result<()> {
    let db = setup_test_db().await?;
    let a = network::create(&db, None).await?;
    let b = network::create(&db, None).await?;
    assert_ne!(a.id, b.id);
    assert!(b.id > a.id);
    assert_eq!(a.ipv4, None);
    assert_eq!(b.ipv4, None);
    Ok(())
}

#[tokio::test]
async fn test_network_duplicate_ipv4() -> Result<()> {
    let db = setup_test_db().await?;
    network::create(&db, Some("10.0.0.0/8")).await?;
    let err = network::create(&db, Some("10.0.0.0/8")).await.unwrap_err();
    assert_eq!(err.to_string(), network::DUPLICATE_IPV4);
    Ok(())
}

#[tokio::test]
async fn test_network_ipv4_length_is_checked_before_storage() -> Result<()> {
    let db = setup_test_db().await?;
    let too_long = "255.255.255.255/32x";
    assert_eq!(too_long.len(), network::IPV4_MAX_LEN + 1);
    let err = network::create(&db, Some(too_long)).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)));
    assert!(network::Entity::find().all(&db).await?.is_empty());

    let fits = network::create(&db, Some("255.255.255.255/32")).await?;
    assert_eq!(fits.ipv4.as_deref(), Some("255.255.255.255/32"));
    Ok(())
}

#[tokio::test]
async fn test_network_set_ipv4_clears_value() -> Result<()> {
    let db = setup_test_db().await?;
    let n = network::create(&db, Some("192.168.0.0/16")).await?;
    let cleared = network::set_ipv4(&db, n, None).await?;
    assert_eq!(cleared.ipv4, None);
    Ok(())
}

async fn link(db: &sea_orm::DatabaseConnection, client_id: Uuid, network_id: i32) -> Result<client_network::Model, sea_orm::DbErr> {
    client_network::ActiveModel {
        client_id: Set(client_id),
        network_id: Set(network_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[tokio::test]
async fn test_client_network_pair_is_unique() -> Result<()> {
    let db = setup_test_db().await?;
    let c = client::create(&db, "linked").await?;
    let n = network::create(&db, Some("172.16.0.0/12")).await?;

    link(&db, c.id, n.id).await?;
    let err = link(&db, c.id, n.id).await.unwrap_err();
    assert!(ModelError::from_db(err, "dup").is_duplicate_key());

    let links = c.find_related(client_network::Entity).all(&db).await?;
    assert_eq!(links.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_client_network_cascades_from_both_parents() -> Result<()> {
    let db = setup_test_db().await?;
    let c = client::create(&db, "cascade").await?;
    let n1 = network::create(&db, Some("10.1.0.0/16")).await?;
    let n2 = network::create(&db, Some("10.2.0.0/16")).await?;
    link(&db, c.id, n1.id).await?;
    let second = link(&db, c.id, n2.id).await?;

    network::Entity::delete_by_id(n1.id).exec(&db).await?;
    let remaining = client_network::Entity::find().all(&db).await?;
    assert_eq!(remaining, vec![second]);

    client::Entity::delete_by_id(c.id).exec(&db).await?;
    assert!(client_network::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_link_to_missing_client_is_rejected() -> Result<()> {
    let db = setup_test_db().await?;
    let n = network::create(&db, None).await?;
    let err = link(&db, Uuid::new_v4(), n.id).await.unwrap_err();
    assert!(!ModelError::from_db(err, "dup").is_duplicate_key());
    Ok(())
}
