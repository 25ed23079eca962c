//! Synchronous (blocking) client for the AWS IAM Query API.
//!
//! This module is only available when the `blocking` feature is enabled.
//! It mirrors the async [`crate::client::Client`] API using `reqwest::blocking`.
//!
//! # Example
//!
//! ```no_run
//! use rs_aws_iam::blocking::Client;
//! use rs_aws_iam::{Credential, ListUsersRequest, Page};
//!
//! fn main() -> rs_aws_iam::Result<()> {
//!     let client = Client::new(Credential::new("id", "secret"))?;
//!
//!     let mut request = ListUsersRequest::new();
//!     loop {
//!         let page = client.list_users(request.clone())?;
//!         for user in &page.users {
//!             println!("{}", user.user_name);
//!         }
//!         match page.next_page() {
//!             Some(next) => request = request.with_page(next),
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};

use crate::action::*;
use crate::config::ClientConfig;
use crate::credential::{ChainProvider, Credential, CredentialProvider};
use crate::error::{IamError, Result};
use crate::exec::handle_response;
use crate::request::{PreparedRequest, build_signed_request};
use crate::response::*;
use crate::sign::{SignatureV2, Signer};

/// Synchronous client for the AWS IAM Query API.
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
    credential: Credential,
    signer: Box<dyn Signer>,
}

impl Client {
    /// Creates a new blocking client with an explicit credential.
    pub fn new(credential: Credential) -> Result<Self> {
        Self::with_config(credential, ClientConfig::default())
    }

    /// Creates a new blocking client with an explicit credential and custom configuration.
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host);

        if let Some(keepalive) = config.tcp_keepalive {
            builder = builder.tcp_keepalive(keepalive);
        }

        let http = builder
            .build()
            .map_err(|e| IamError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            signer: Box::new(SignatureV2::new(config.signature_method)),
            config,
            credential,
        })
    }

    /// Creates a new blocking client using the default credential chain
    /// (env vars, then the profile file).
    pub fn from_env() -> Result<Self> {
        let credential = ChainProvider::default_chain().resolve()?;
        Self::new(credential)
    }

    /// Replaces the request signer.
    pub fn with_signer(mut self, signer: impl Signer + 'static) -> Self {
        self.signer = Box::new(signer);
        self
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends any [`Action`] and decodes its response.
    pub fn send<A: Action>(&self, action: A) -> Result<Response<A::Output>> {
        let request =
            build_signed_request(&action, &self.credential, &self.config, self.signer.as_ref())?;
        tracing::debug!(action = A::NAME, method = %A::METHOD, "sending IAM request");

        let builder = match request {
            PreparedRequest::Get { url } => self.http.get(url),
            PreparedRequest::Post { url, body } => self
                .http
                .post(url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(CONTENT_LENGTH, body.len())
                .body(body),
        };

        let response = builder.send()?;
        let status = response.status();
        let text = response.text()?;

        handle_response(A::NAME, status, text)
    }

    /// Creates a user.
    pub fn create_user(&self, request: CreateUserRequest) -> Result<Response<CreateUserResult>> {
        self.send(request)
    }

    /// Gets a user, or the caller when no name is set.
    pub fn get_user(&self, request: GetUserRequest) -> Result<Response<GetUserResult>> {
        self.send(request)
    }

    /// Deletes a user.
    pub fn delete_user(&self, request: DeleteUserRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists users, optionally under a path prefix.
    pub fn list_users(&self, request: ListUsersRequest) -> Result<Response<ListUsersResult>> {
        self.send(request)
    }

    /// Creates a group.
    pub fn create_group(&self, request: CreateGroupRequest) -> Result<Response<CreateGroupResult>> {
        self.send(request)
    }

    /// Gets a group and its members.
    pub fn get_group(&self, request: GetGroupRequest) -> Result<Response<GetGroupResult>> {
        self.send(request)
    }

    /// Deletes a group.
    pub fn delete_group(&self, request: DeleteGroupRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists groups, optionally under a path prefix.
    pub fn list_groups(&self, request: ListGroupsRequest) -> Result<Response<ListGroupsResult>> {
        self.send(request)
    }

    /// Lists the groups a user belongs to.
    pub fn list_groups_for_user(
        &self,
        request: ListGroupsForUserRequest,
    ) -> Result<Response<ListGroupsResult>> {
        self.send(request)
    }

    /// Adds a user to a group.
    pub fn add_user_to_group(&self, request: AddUserToGroupRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Removes a user from a group.
    pub fn remove_user_from_group(
        &self,
        request: RemoveUserFromGroupRequest,
    ) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Creates an access key. The secret is only ever returned by this call.
    pub fn create_access_key(
        &self,
        request: CreateAccessKeyRequest,
    ) -> Result<Response<CreateAccessKeyResult>> {
        self.send(request)
    }

    /// Activates or deactivates an access key.
    pub fn update_access_key(&self, request: UpdateAccessKeyRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Deletes an access key.
    pub fn delete_access_key(&self, request: DeleteAccessKeyRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists the access keys of a user.
    pub fn list_access_keys(
        &self,
        request: ListAccessKeysRequest,
    ) -> Result<Response<ListAccessKeysResult>> {
        self.send(request)
    }

    /// Gets an inline user policy.
    pub fn get_user_policy(
        &self,
        request: GetUserPolicyRequest,
    ) -> Result<Response<GetUserPolicyResult>> {
        self.send(request)
    }

    /// Adds or replaces an inline user policy.
    pub fn put_user_policy(&self, request: PutUserPolicyRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Deletes an inline user policy.
    pub fn delete_user_policy(&self, request: DeleteUserPolicyRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists the inline policy names of a user.
    pub fn list_user_policies(
        &self,
        request: ListUserPoliciesRequest,
    ) -> Result<Response<ListPoliciesResult>> {
        self.send(request)
    }

    /// Gets an inline group policy.
    pub fn get_group_policy(
        &self,
        request: GetGroupPolicyRequest,
    ) -> Result<Response<GetGroupPolicyResult>> {
        self.send(request)
    }

    /// Adds or replaces an inline group policy.
    pub fn put_group_policy(&self, request: PutGroupPolicyRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Deletes an inline group policy.
    pub fn delete_group_policy(
        &self,
        request: DeleteGroupPolicyRequest,
    ) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists the inline policy names of a group.
    pub fn list_group_policies(
        &self,
        request: ListGroupPoliciesRequest,
    ) -> Result<Response<ListPoliciesResult>> {
        self.send(request)
    }

    /// Creates a role with its trust policy.
    pub fn create_role(&self, request: CreateRoleRequest) -> Result<Response<CreateRoleResult>> {
        self.send(request)
    }

    /// Gets a role.
    pub fn get_role(&self, request: GetRoleRequest) -> Result<Response<GetRoleResult>> {
        self.send(request)
    }

    /// Deletes a role.
    pub fn delete_role(&self, request: DeleteRoleRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists roles, optionally under a path prefix.
    pub fn list_roles(&self, request: ListRolesRequest) -> Result<Response<ListRolesResult>> {
        self.send(request)
    }

    /// Gets an inline role policy.
    pub fn get_role_policy(
        &self,
        request: GetRolePolicyRequest,
    ) -> Result<Response<GetRolePolicyResult>> {
        self.send(request)
    }

    /// Adds or replaces an inline role policy.
    pub fn put_role_policy(&self, request: PutRolePolicyRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Deletes an inline role policy.
    pub fn delete_role_policy(&self, request: DeleteRolePolicyRequest) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists the inline policy names of a role.
    pub fn list_role_policies(
        &self,
        request: ListRolePoliciesRequest,
    ) -> Result<Response<ListPoliciesResult>> {
        self.send(request)
    }

    /// Gets an instance profile and its roles.
    pub fn get_instance_profile(
        &self,
        request: GetInstanceProfileRequest,
    ) -> Result<Response<GetInstanceProfileResult>> {
        self.send(request)
    }

    /// Lists instance profiles, optionally under a path prefix.
    pub fn list_instance_profiles(
        &self,
        request: ListInstanceProfilesRequest,
    ) -> Result<Response<ListInstanceProfilesResult>> {
        self.send(request)
    }

    /// Lists the instance profiles a role belongs to.
    pub fn list_instance_profiles_for_role(
        &self,
        request: ListInstanceProfilesForRoleRequest,
    ) -> Result<Response<ListInstanceProfilesResult>> {
        self.send(request)
    }

    /// Creates the account alias.
    pub fn create_account_alias(
        &self,
        request: CreateAccountAliasRequest,
    ) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Deletes the account alias.
    pub fn delete_account_alias(
        &self,
        request: DeleteAccountAliasRequest,
    ) -> Result<Response<Empty>> {
        self.send(request)
    }

    /// Lists the account aliases.
    pub fn list_account_aliases(
        &self,
        request: ListAccountAliasesRequest,
    ) -> Result<Response<ListAccountAliasesResult>> {
        self.send(request)
    }
}
