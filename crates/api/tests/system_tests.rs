mod common;

use api::gql::build_schema;
use common::*;

#[tokio::test]
async fn test_health_check_query() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state);

    // Public query, no authentication needed
    let query = r#"
        query {
            publishedEvents {
                id
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None, None).await;

    assert!(
        response.errors.is_empty(),
        "Basic health check query should succeed: {:?}",
        response.errors
    );
}

#[tokio::test]
async fn test_invalid_query() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state);

    let query = r#"
        query {
            nonExistentField
        }
    "#;

    let response = execute_graphql(&schema, query, None, None).await;

    assert!(
        !response.errors.is_empty(),
        "Invalid query should return errors"
    );
    assert!(
        response.errors[0].message.contains("nonExistentField"),
        "Error message should name the unknown field, got: '{}'",
        response.errors[0].message
    );
}

#[tokio::test]
async fn test_malformed_query() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state);

    let query = r#"
        query {
            publishedEvents {
                id
                # missing closing brace
    "#;

    let response = execute_graphql(&schema, query, None, None).await;

    assert!(
        !response.errors.is_empty(),
        "Malformed query should return errors"
    );
}

#[tokio::test]
async fn test_mutations_are_not_exposed() {
    let app_state = setup_test_db().await;
    let schema = build_schema(app_state);

    let query = r#"
        mutation {
            createEvent(name: "Nope") { id }
        }
    "#;

    let response = execute_graphql(&schema, query, None, None).await;

    assert!(
        !response.errors.is_empty(),
        "The schema is read-only"
    );
}
