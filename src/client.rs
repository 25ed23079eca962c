use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};

use crate::action::*;
use crate::config::ClientConfig;
use crate::credential::{ChainProvider, Credential, CredentialProvider};
use crate::error::{IamError, Result};
use crate::exec::handle_response;
use crate::request::{PreparedRequest, build_signed_request};
use crate::response::*;
use crate::sign::{SignatureV2, Signer};

/// Async client for the AWS IAM Query API.
///
/// Every call is a single signed round trip. The client holds no mutable
/// state beyond the HTTP connection pool, so it can be shared freely across
/// tasks.
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    credential: Credential,
    signer: Box<dyn Signer>,
}

impl Client {
    /// Creates a new client with an explicit credential.
    pub fn new(credential: Credential) -> Result<Self> {
        Self::with_config(credential, ClientConfig::default())
    }

    /// Creates a new client with an explicit credential and custom configuration.
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
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

    /// Creates a new client using the default credential chain (env vars → profile file).
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
    pub async fn send<A: Action>(&self, action: A) -> Result<Response<A::Output>> {
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

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        handle_response(A::NAME, status, text)
    }

    /// Creates a user.
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<Response<CreateUserResult>> {
        self.send(request).await
    }

    /// Gets a user, or the caller when no name is set.
    pub async fn get_user(&self, request: GetUserRequest) -> Result<Response<GetUserResult>> {
        self.send(request).await
    }

    /// Deletes a user.
    pub async fn delete_user(&self, request: DeleteUserRequest) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists users, optionally under a path prefix.
    pub async fn list_users(&self, request: ListUsersRequest) -> Result<Response<ListUsersResult>> {
        self.send(request).await
    }

    /// Creates a group.
    pub async fn create_group(
        &self,
        request: CreateGroupRequest,
    ) -> Result<Response<CreateGroupResult>> {
        self.send(request).await
    }

    /// Gets a group and its members.
    pub async fn get_group(&self, request: GetGroupRequest) -> Result<Response<GetGroupResult>> {
        self.send(request).await
    }

    /// Deletes a group.
    pub async fn delete_group(&self, request: DeleteGroupRequest) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists groups, optionally under a path prefix.
    pub async fn list_groups(
        &self,
        request: ListGroupsRequest,
    ) -> Result<Response<ListGroupsResult>> {
        self.send(request).await
    }

    /// Lists the groups a user belongs to.
    pub async fn list_groups_for_user(
        &self,
        request: ListGroupsForUserRequest,
    ) -> Result<Response<ListGroupsResult>> {
        self.send(request).await
    }

    /// Adds a user to a group.
    pub async fn add_user_to_group(
        &self,
        request: AddUserToGroupRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Removes a user from a group.
    pub async fn remove_user_from_group(
        &self,
        request: RemoveUserFromGroupRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Creates an access key. The secret is only ever returned by this call.
    pub async fn create_access_key(
        &self,
        request: CreateAccessKeyRequest,
    ) -> Result<Response<CreateAccessKeyResult>> {
        self.send(request).await
    }

    /// Activates or deactivates an access key.
    pub async fn update_access_key(
        &self,
        request: UpdateAccessKeyRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Deletes an access key.
    pub async fn delete_access_key(
        &self,
        request: DeleteAccessKeyRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists the access keys of a user.
    pub async fn list_access_keys(
        &self,
        request: ListAccessKeysRequest,
    ) -> Result<Response<ListAccessKeysResult>> {
        self.send(request).await
    }

    /// Gets an inline user policy.
    pub async fn get_user_policy(
        &self,
        request: GetUserPolicyRequest,
    ) -> Result<Response<GetUserPolicyResult>> {
        self.send(request).await
    }

    /// Adds or replaces an inline user policy.
    pub async fn put_user_policy(&self, request: PutUserPolicyRequest) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Deletes an inline user policy.
    pub async fn delete_user_policy(
        &self,
        request: DeleteUserPolicyRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists the inline policy names of a user.
    pub async fn list_user_policies(
        &self,
        request: ListUserPoliciesRequest,
    ) -> Result<Response<ListPoliciesResult>> {
        self.send(request).await
    }

    /// Gets an inline group policy.
    pub async fn get_group_policy(
        &self,
        request: GetGroupPolicyRequest,
    ) -> Result<Response<GetGroupPolicyResult>> {
        self.send(request).await
    }

    /// Adds or replaces an inline group policy.
    pub async fn put_group_policy(
        &self,
        request: PutGroupPolicyRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Deletes an inline group policy.
    pub async fn delete_group_policy(
        &self,
        request: DeleteGroupPolicyRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists the inline policy names of a group.
    pub async fn list_group_policies(
        &self,
        request: ListGroupPoliciesRequest,
    ) -> Result<Response<ListPoliciesResult>> {
        self.send(request).await
    }

    /// Creates a role with its trust policy.
    pub async fn create_role(
        &self,
        request: CreateRoleRequest,
    ) -> Result<Response<CreateRoleResult>> {
        self.send(request).await
    }

    /// Gets a role.
    pub async fn get_role(&self, request: GetRoleRequest) -> Result<Response<GetRoleResult>> {
        self.send(request).await
    }

    /// Deletes a role.
    pub async fn delete_role(&self, request: DeleteRoleRequest) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists roles, optionally under a path prefix.
    pub async fn list_roles(&self, request: ListRolesRequest) -> Result<Response<ListRolesResult>> {
        self.send(request).await
    }

    /// Gets an inline role policy.
    pub async fn get_role_policy(
        &self,
        request: GetRolePolicyRequest,
    ) -> Result<Response<GetRolePolicyResult>> {
        self.send(request).await
    }

    /// Adds or replaces an inline role policy.
    pub async fn put_role_policy(&self, request: PutRolePolicyRequest) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Deletes an inline role policy.
    pub async fn delete_role_policy(
        &self,
        request: DeleteRolePolicyRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists the inline policy names of a role.
    pub async fn list_role_policies(
        &self,
        request: ListRolePoliciesRequest,
    ) -> Result<Response<ListPoliciesResult>> {
        self.send(request).await
    }

    /// Gets an instance profile and its roles.
    pub async fn get_instance_profile(
        &self,
        request: GetInstanceProfileRequest,
    ) -> Result<Response<GetInstanceProfileResult>> {
        self.send(request).await
    }

    /// Lists instance profiles, optionally under a path prefix.
    pub async fn list_instance_profiles(
        &self,
        request: ListInstanceProfilesRequest,
    ) -> Result<Response<ListInstanceProfilesResult>> {
        self.send(request).await
    }

    /// Lists the instance profiles a role belongs to.
    pub async fn list_instance_profiles_for_role(
        &self,
        request: ListInstanceProfilesForRoleRequest,
    ) -> Result<Response<ListInstanceProfilesResult>> {
        self.send(request).await
    }

    /// Creates the account alias.
    pub async fn create_account_alias(
        &self,
        request: CreateAccountAliasRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Deletes the account alias.
    pub async fn delete_account_alias(
        &self,
        request: DeleteAccountAliasRequest,
    ) -> Result<Response<Empty>> {
        self.send(request).await
    }

    /// Lists the account aliases.
    pub async fn list_account_aliases(
        &self,
        request: ListAccountAliasesRequest,
    ) -> Result<Response<ListAccountAliasesResult>> {
        self.send(request).await
    }
}
