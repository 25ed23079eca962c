//! Live integration tests using real AWS credentials.
//!
//! These tests are ignored by default. Run with:
//! ```bash
//! # Set environment variables first (or configure ~/.aws/credentials)
//! export AWS_ACCESS_KEY_ID=your-access-key-id
//! export AWS_SECRET_ACCESS_KEY=your-secret-access-key
//!
//! RUST_LOG=rs_aws_iam=debug cargo test --test live -- --ignored --nocapture
//! ```
//!
//! `live_user_lifecycle` creates and deletes a user named
//! `rs-aws-iam-live-<pid>`; the credentials need IAM write access.

use rs_aws_iam::{
    Client, CreateUserRequest, DeleteUserPolicyRequest, DeleteUserRequest, GetUserPolicyRequest,
    GetUserRequest, ListUserPoliciesRequest, ListUsersRequest, Page, Pagination,
    PutUserPolicyRequest,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create client using the default credential chain
fn live_client() -> Client {
    init_tracing();
    Client::from_env().expect("failed to create client from environment")
}

#[tokio::test]
#[ignore = "requires real AWS credentials"]
async fn live_get_caller_user() {
    let client = live_client();

    let resp = client
        .get_user(GetUserRequest::new())
        .await
        .expect("get_user failed");

    println!("=== GetUser Response ===");
    println!("RequestId: {}", resp.request_id());
    println!("UserName: {}", resp.user.user_name);
    println!("Arn: {}", resp.user.arn);

    assert!(!resp.request_id().is_empty(), "request_id should not be empty");
    assert!(
        resp.user.arn.starts_with("arn:aws:iam::"),
        "arn should start with arn:aws:iam::"
    );
}

#[tokio::test]
#[ignore = "requires real AWS credentials"]
async fn live_list_users_all_pages() {
    let client = live_client();

    let mut request = ListUsersRequest::new().with_page(Pagination::new().with_max_items(10));
    let mut total = 0;
    loop {
        let page = client
            .list_users(request.clone())
            .await
            .expect("list_users failed");
        total += page.users.len();
        match page.next_page() {
            Some(next) => request = request.with_page(next.with_max_items(10)),
            None => break,
        }
    }

    println!("Listed {} users", total);
}

#[tokio::test]
#[ignore = "requires real AWS credentials with IAM write access"]
async fn live_user_lifecycle() {
    let client = live_client();
    let user_name = format!("rs-aws-iam-live-{}", std::process::id());
    let document = r#"{
  "Version": "2012-10-17",
  "Statement": [{"Effect": "Deny", "Action": "*", "Resource": "*"}]
}"#;

    let created = client
        .create_user(CreateUserRequest::new(&user_name).with_path("/rs-aws-iam/"))
        .await
        .expect("create_user failed");
    assert_eq!(created.user.user_name, user_name);
    assert_eq!(created.user.path, "/rs-aws-iam/");

    client
        .put_user_policy(PutUserPolicyRequest::new(&user_name, "DenyAll", document))
        .await
        .expect("put_user_policy failed");

    let policies = client
        .list_user_policies(ListUserPoliciesRequest::new(&user_name))
        .await
        .expect("list_user_policies failed");
    assert_eq!(policies.policy_names, ["DenyAll"]);

    let policy = client
        .get_user_policy(GetUserPolicyRequest::new(&user_name, "DenyAll"))
        .await
        .expect("get_user_policy failed");
    println!("PolicyDocument (URL-encoded by IAM): {}", policy.policy_document);

    client
        .delete_user_policy(DeleteUserPolicyRequest::new(&user_name, "DenyAll"))
        .await
        .expect("delete_user_policy failed");
    client
        .delete_user(DeleteUserRequest::new(&user_name))
        .await
        .expect("delete_user failed");

    let err = client
        .get_user(GetUserRequest::new().with_user_name(&user_name))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some("NoSuchEntity"));
}
