//! IAM actions and their request parameters.
//!
//! Each request struct maps one IAM action onto its parameter names. Required
//! fields are constructor arguments; optional fields are `with_*` setters and
//! are omitted from the request when unset or empty.

use serde::de::DeserializeOwned;

use crate::request::{HttpMethod, ParameterSet, Pagination};
use crate::response::{
    CreateAccessKeyResult, CreateGroupResult, CreateRoleResult, CreateUserResult, Empty,
    GetGroupPolicyResult, GetGroupResult, GetInstanceProfileResult, GetRolePolicyResult,
    GetRoleResult, GetUserPolicyResult, GetUserResult, ListAccessKeysResult,
    ListAccountAliasesResult, ListGroupsResult, ListInstanceProfilesResult, ListPoliciesResult,
    ListRolesResult, ListUsersResult,
};

/// A single IAM Query API action.
pub trait Action {
    /// Value of the `Action` parameter.
    const NAME: &'static str;

    /// Transport the action is sent with. Actions carrying policy documents
    /// use POST so large documents stay out of the URL.
    const METHOD: HttpMethod = HttpMethod::Get;

    /// Decoded contents of the `<NAME>Result` element.
    type Output: DeserializeOwned;

    /// Writes the action's own parameters. `Action`, `Version`, `Timestamp`
    /// and authentication entries are added by the client.
    fn to_params(&self, params: &mut ParameterSet);
}

/// Status of an access key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKeyStatus {
    Active,
    Inactive,
}

impl AccessKeyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessKeyStatus::Active => "Active",
            AccessKeyStatus::Inactive => "Inactive",
        }
    }
}

/// Creates a user.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub user_name: String,
    pub path: Option<String>,
}

impl CreateUserRequest {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Action for CreateUserRequest {
    const NAME: &'static str = "CreateUser";
    type Output = CreateUserResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("UserName", self.user_name.as_str());
        params.insert_opt("Path", self.path.as_deref());
    }
}

/// Gets a user; without a name IAM returns the caller.
#[derive(Debug, Clone, Default)]
pub struct GetUserRequest {
    pub user_name: Option<String>,
}

impl GetUserRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

impl Action for GetUserRequest {
    const NAME: &'static str = "GetUser";
    type Output = GetUserResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert_opt("UserName", self.user_name.as_deref());
    }
}

#[derive(Debug, Clone)]
pub struct DeleteUserRequest {
    pub user_name: String,
}

impl DeleteUserRequest {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }
}

impl Action for DeleteUserRequest {
    const NAME: &'static str = "DeleteUser";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("UserName", self.user_name.as_str());
    }
}

/// Lists users, optionally under a path prefix.
#[derive(Debug, Clone, Default)]
pub struct ListUsersRequest {
    pub path_prefix: Option<String>,
    pub page: Pagination,
}

impl ListUsersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListUsersRequest {
    const NAME: &'static str = "ListUsers";
    type Output = ListUsersResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert_opt("PathPrefix", self.path_prefix.as_deref());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub path: Option<String>,
}

impl CreateGroupRequest {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Action for CreateGroupRequest {
    const NAME: &'static str = "CreateGroup";
    type Output = CreateGroupResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        params.insert_opt("Path", self.path.as_deref());
    }
}

/// Gets a group and a page of its members.
#[derive(Debug, Clone)]
pub struct GetGroupRequest {
    pub group_name: String,
    pub page: Pagination,
}

impl GetGroupRequest {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            page: Pagination::default(),
        }
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for GetGroupRequest {
    const NAME: &'static str = "GetGroup";
    type Output = GetGroupResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct DeleteGroupRequest {
    pub group_name: String,
}

impl DeleteGroupRequest {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
        }
    }
}

impl Action for DeleteGroupRequest {
    const NAME: &'static str = "DeleteGroup";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListGroupsRequest {
    pub path_prefix: Option<String>,
    pub page: Pagination,
}

impl ListGroupsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListGroupsRequest {
    const NAME: &'static str = "ListGroups";
    type Output = ListGroupsResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert_opt("PathPrefix", self.path_prefix.as_deref());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct ListGroupsForUserRequest {
    pub user_name: String,
    pub page: Pagination,
}

impl ListGroupsForUserRequest {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            page: Pagination::default(),
        }
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListGroupsForUserRequest {
    const NAME: &'static str = "ListGroupsForUser";
    type Output = ListGroupsResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("UserName", self.user_name.as_str());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct AddUserToGroupRequest {
    pub group_name: String,
    pub user_name: String,
}

impl AddUserToGroupRequest {
    pub fn new(group_name: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            user_name: user_name.into(),
        }
    }
}

impl Action for AddUserToGroupRequest {
    const NAME: &'static str = "AddUserToGroup";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        params.insert("UserName", self.user_name.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct RemoveUserFromGroupRequest {
    pub group_name: String,
    pub user_name: String,
}

impl RemoveUserFromGroupRequest {
    pub fn new(group_name: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            user_name: user_name.into(),
        }
    }
}

impl Action for RemoveUserFromGroupRequest {
    const NAME: &'static str = "RemoveUserFromGroup";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        params.insert("UserName", self.user_name.as_str());
    }
}

/// Creates an access key; without a user name the key belongs to the caller.
#[derive(Debug, Clone, Default)]
pub struct CreateAccessKeyRequest {
    pub user_name: Option<String>,
}

impl CreateAccessKeyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

impl Action for CreateAccessKeyRequest {
    const NAME: &'static str = "CreateAccessKey";
    type Output = CreateAccessKeyResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert_opt("UserName", self.user_name.as_deref());
    }
}

#[derive(Debug, Clone)]
pub struct UpdateAccessKeyRequest {
    pub access_key_id: String,
    pub status: AccessKeyStatus,
    pub user_name: Option<String>,
}

impl UpdateAccessKeyRequest {
    pub fn new(access_key_id: impl Into<String>, status: AccessKeyStatus) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            status,
            user_name: None,
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

impl Action for UpdateAccessKeyRequest {
    const NAME: &'static str = "UpdateAccessKey";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("AccessKeyId", self.access_key_id.as_str());
        params.insert("Status", self.status.as_str());
        params.insert_opt("UserName", self.user_name.as_deref());
    }
}

#[derive(Debug, Clone)]
pub struct DeleteAccessKeyRequest {
    pub access_key_id: String,
    pub user_name: Option<String>,
}

impl DeleteAccessKeyRequest {
    pub fn new(access_key_id: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            user_name: None,
        }
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }
}

impl Action for DeleteAccessKeyRequest {
    const NAME: &'static str = "DeleteAccessKey";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("AccessKeyId", self.access_key_id.as_str());
        params.insert_opt("UserName", self.user_name.as_deref());
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListAccessKeysRequest {
    pub user_name: Option<String>,
    pub page: Pagination,
}

impl ListAccessKeysRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListAccessKeysRequest {
    const NAME: &'static str = "ListAccessKeys";
    type Output = ListAccessKeysResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert_opt("UserName", self.user_name.as_deref());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct GetUserPolicyRequest {
    pub user_name: String,
    pub policy_name: String,
}

impl GetUserPolicyRequest {
    pub fn new(user_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            policy_name: policy_name.into(),
        }
    }
}

impl Action for GetUserPolicyRequest {
    const NAME: &'static str = "GetUserPolicy";
    type Output = GetUserPolicyResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("UserName", self.user_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
    }
}

/// Adds or replaces an inline user policy. Sent as a POST form.
#[derive(Debug, Clone)]
pub struct PutUserPolicyRequest {
    pub user_name: String,
    pub policy_name: String,
    pub policy_document: String,
}

impl PutUserPolicyRequest {
    pub fn new(
        user_name: impl Into<String>,
        policy_name: impl Into<String>,
        policy_document: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            policy_name: policy_name.into(),
            policy_document: policy_document.into(),
        }
    }
}

impl Action for PutUserPolicyRequest {
    const NAME: &'static str = "PutUserPolicy";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("UserName", self.user_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
        params.insert("PolicyDocument", self.policy_document.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct DeleteUserPolicyRequest {
    pub user_name: String,
    pub policy_name: String,
}

impl DeleteUserPolicyRequest {
    pub fn new(user_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            policy_name: policy_name.into(),
        }
    }
}

impl Action for DeleteUserPolicyRequest {
    const NAME: &'static str = "DeleteUserPolicy";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("UserName", self.user_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct ListUserPoliciesRequest {
    pub user_name: String,
    pub page: Pagination,
}

impl ListUserPoliciesRequest {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            page: Pagination::default(),
        }
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListUserPoliciesRequest {
    const NAME: &'static str = "ListUserPolicies";
    type Output = ListPoliciesResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("UserName", self.user_name.as_str());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct GetGroupPolicyRequest {
    pub group_name: String,
    pub policy_name: String,
}

impl GetGroupPolicyRequest {
    pub fn new(group_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            policy_name: policy_name.into(),
        }
    }
}

impl Action for GetGroupPolicyRequest {
    const NAME: &'static str = "GetGroupPolicy";
    type Output = GetGroupPolicyResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
    }
}

/// Adds or replaces an inline group policy. Sent as a POST form.
#[derive(Debug, Clone)]
pub struct PutGroupPolicyRequest {
    pub group_name: String,
    pub policy_name: String,
    pub policy_document: String,
}

impl PutGroupPolicyRequest {
    pub fn new(
        group_name: impl Into<String>,
        policy_name: impl Into<String>,
        policy_document: impl Into<String>,
    ) -> Self {
        Self {
            group_name: group_name.into(),
            policy_name: policy_name.into(),
            policy_document: policy_document.into(),
        }
    }
}

impl Action for PutGroupPolicyRequest {
    const NAME: &'static str = "PutGroupPolicy";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
        params.insert("PolicyDocument", self.policy_document.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct DeleteGroupPolicyRequest {
    pub group_name: String,
    pub policy_name: String,
}

impl DeleteGroupPolicyRequest {
    pub fn new(group_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            policy_name: policy_name.into(),
        }
    }
}

impl Action for DeleteGroupPolicyRequest {
    const NAME: &'static str = "DeleteGroupPolicy";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct ListGroupPoliciesRequest {
    pub group_name: String,
    pub page: Pagination,
}

impl ListGroupPoliciesRequest {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            page: Pagination::default(),
        }
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListGroupPoliciesRequest {
    const NAME: &'static str = "ListGroupPolicies";
    type Output = ListPoliciesResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("GroupName", self.group_name.as_str());
        self.page.apply(params);
    }
}

/// Creates a role with a trust policy. Sent as a POST form.
#[derive(Debug, Clone)]
pub struct CreateRoleRequest {
    pub role_name: String,
    pub assume_role_policy_document: String,
    pub path: Option<String>,
}

impl CreateRoleRequest {
    pub fn new(
        role_name: impl Into<String>,
        assume_role_policy_document: impl Into<String>,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            assume_role_policy_document: assume_role_policy_document.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl Action for CreateRoleRequest {
    const NAME: &'static str = "CreateRole";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Output = CreateRoleResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
        params.insert(
            "AssumeRolePolicyDocument",
            self.assume_role_policy_document.as_str(),
        );
        params.insert_opt("Path", self.path.as_deref());
    }
}

#[derive(Debug, Clone)]
pub struct GetRoleRequest {
    pub role_name: String,
}

impl GetRoleRequest {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
        }
    }
}

impl Action for GetRoleRequest {
    const NAME: &'static str = "GetRole";
    type Output = GetRoleResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct DeleteRoleRequest {
    pub role_name: String,
}

impl DeleteRoleRequest {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
        }
    }
}

impl Action for DeleteRoleRequest {
    const NAME: &'static str = "DeleteRole";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListRolesRequest {
    pub path_prefix: Option<String>,
    pub page: Pagination,
}

impl ListRolesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListRolesRequest {
    const NAME: &'static str = "ListRoles";
    type Output = ListRolesResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert_opt("PathPrefix", self.path_prefix.as_deref());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct GetRolePolicyRequest {
    pub role_name: String,
    pub policy_name: String,
}

impl GetRolePolicyRequest {
    pub fn new(role_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            policy_name: policy_name.into(),
        }
    }
}

impl Action for GetRolePolicyRequest {
    const NAME: &'static str = "GetRolePolicy";
    type Output = GetRolePolicyResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
    }
}

/// Adds or replaces an inline role policy. Sent as a POST form.
#[derive(Debug, Clone)]
pub struct PutRolePolicyRequest {
    pub role_name: String,
    pub policy_name: String,
    pub policy_document: String,
}

impl PutRolePolicyRequest {
    pub fn new(
        role_name: impl Into<String>,
        policy_name: impl Into<String>,
        policy_document: impl Into<String>,
    ) -> Self {
        Self {
            role_name: role_name.into(),
            policy_name: policy_name.into(),
            policy_document: policy_document.into(),
        }
    }
}

impl Action for PutRolePolicyRequest {
    const NAME: &'static str = "PutRolePolicy";
    const METHOD: HttpMethod = HttpMethod::Post;
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
        params.insert("PolicyDocument", self.policy_document.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct DeleteRolePolicyRequest {
    pub role_name: String,
    pub policy_name: String,
}

impl DeleteRolePolicyRequest {
    pub fn new(role_name: impl Into<String>, policy_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            policy_name: policy_name.into(),
        }
    }
}

impl Action for DeleteRolePolicyRequest {
    const NAME: &'static str = "DeleteRolePolicy";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
        params.insert("PolicyName", self.policy_name.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct ListRolePoliciesRequest {
    pub role_name: String,
    pub page: Pagination,
}

impl ListRolePoliciesRequest {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            page: Pagination::default(),
        }
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListRolePoliciesRequest {
    const NAME: &'static str = "ListRolePolicies";
    type Output = ListPoliciesResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct GetInstanceProfileRequest {
    pub instance_profile_name: String,
}

impl GetInstanceProfileRequest {
    pub fn new(instance_profile_name: impl Into<String>) -> Self {
        Self {
            instance_profile_name: instance_profile_name.into(),
        }
    }
}

impl Action for GetInstanceProfileRequest {
    const NAME: &'static str = "GetInstanceProfile";
    type Output = GetInstanceProfileResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("InstanceProfileName", self.instance_profile_name.as_str());
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListInstanceProfilesRequest {
    pub path_prefix: Option<String>,
    pub page: Pagination,
}

impl ListInstanceProfilesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListInstanceProfilesRequest {
    const NAME: &'static str = "ListInstanceProfiles";
    type Output = ListInstanceProfilesResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert_opt("PathPrefix", self.path_prefix.as_deref());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct ListInstanceProfilesForRoleRequest {
    pub role_name: String,
    pub page: Pagination,
}

impl ListInstanceProfilesForRoleRequest {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
            page: Pagination::default(),
        }
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListInstanceProfilesForRoleRequest {
    const NAME: &'static str = "ListInstanceProfilesForRole";
    type Output = ListInstanceProfilesResult;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("RoleName", self.role_name.as_str());
        self.page.apply(params);
    }
}

#[derive(Debug, Clone)]
pub struct CreateAccountAliasRequest {
    pub account_alias: String,
}

impl CreateAccountAliasRequest {
    pub fn new(account_alias: impl Into<String>) -> Self {
        Self {
            account_alias: account_alias.into(),
        }
    }
}

impl Action for CreateAccountAliasRequest {
    const NAME: &'static str = "CreateAccountAlias";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("AccountAlias", self.account_alias.as_str());
    }
}

#[derive(Debug, Clone)]
pub struct DeleteAccountAliasRequest {
    pub account_alias: String,
}

impl DeleteAccountAliasRequest {
    pub fn new(account_alias: impl Into<String>) -> Self {
        Self {
            account_alias: account_alias.into(),
        }
    }
}

impl Action for DeleteAccountAliasRequest {
    const NAME: &'static str = "DeleteAccountAlias";
    type Output = Empty;

    fn to_params(&self, params: &mut ParameterSet) {
        params.insert("AccountAlias", self.account_alias.as_str());
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListAccountAliasesRequest {
    pub page: Pagination,
}

impl ListAccountAliasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }
}

impl Action for ListAccountAliasesRequest {
    const NAME: &'static str = "ListAccountAliases";
    type Output = ListAccountAliasesResult;

    fn to_params(&self, params: &mut ParameterSet) {
        self.page.apply(params);
    }
}
