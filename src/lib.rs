//! AWS IAM (Identity and Access Management) Query API client for Rust.
//!
//! This crate provides both async and sync (blocking) clients for the IAM
//! Query API. Every operation is a single signed HTTP round trip:
//!
//! - parameters are assembled from a typed request ([`Action`]), with unset
//!   optional fields omitted,
//! - the parameter set is signed with AWS Signature Version 2,
//! - it is sent as a GET query string, or as a POST form for actions that
//!   carry policy documents,
//! - a `200 OK` body is decoded into [`Response`]; any other status becomes an
//!   [`IamError::Service`] built from the `<ErrorResponse>` envelope.
//!
//! Users, groups, access keys, inline policies, roles, instance profiles and
//! account aliases are covered. List operations take a [`Pagination`] cursor
//! and return results implementing [`Page`].
//!
//! # Quick Start (async)
//!
//! ```no_run
//! use rs_aws_iam::{Client, CreateUserRequest, Credential};
//!
//! # async fn example() -> rs_aws_iam::Result<()> {
//! let client = Client::new(Credential::new("your-access-key-id", "your-secret-access-key"))?;
//!
//! let resp = client
//!     .create_user(CreateUserRequest::new("Bob").with_path("/division_abc/"))
//!     .await?;
//!
//! println!("Created {} ({})", resp.user.arn, resp.request_id());
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod request;
pub mod response;
pub mod sign;

#[cfg(feature = "blocking")]
pub mod blocking;

mod exec;

pub use action::*;
pub use client::Client;
pub use config::ClientConfig;
pub use credential::{
    ChainProvider, Credential, CredentialProvider, EnvProvider, ProfileProvider, StaticProvider,
};
pub use error::{IamError, Result, ServiceError};
pub use request::{HttpMethod, Pagination, ParameterSet};
pub use response::{
    AccessKey, CreateAccessKeyResult, CreateGroupResult, CreateRoleResult, CreateUserResult, Empty,
    GetGroupPolicyResult, GetGroupResult, GetInstanceProfileResult, GetRolePolicyResult,
    GetRoleResult, GetUserPolicyResult, GetUserResult, Group, InstanceProfile,
    ListAccessKeysResult, ListAccountAliasesResult, ListGroupsResult, ListInstanceProfilesResult,
    ListPoliciesResult, ListRolesResult, ListUsersResult, Page, Response, ResponseMetadata, Role,
    User,
};
pub use sign::{SignatureMethod, SignatureV2, Signer};

// Compile-time assertions: key types must be Send + Sync for use across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Client>;
    let _ = assert_send_sync::<IamError>;
    let _ = assert_send_sync::<Credential>;
    #[cfg(feature = "blocking")]
    let _ = assert_send_sync::<blocking::Client>;
};
