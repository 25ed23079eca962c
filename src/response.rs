//! Typed IAM responses and the XML envelope they arrive in.
//!
//! Every successful response looks like
//!
//! ```xml
//! <ListUsersResponse>
//!   <ListUsersResult>…</ListUsersResult>
//!   <ResponseMetadata><RequestId>…</RequestId></ResponseMetadata>
//! </ListUsersResponse>
//! ```
//!
//! [`Response`] maps the `…Result` element onto the action's result type and
//! the metadata onto [`ResponseMetadata`]. Lists are wrapped in repeated
//! `<member>` elements.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;

use quick_xml::events::{BytesCData, Event};
use quick_xml::{DeError, Reader, Writer};
use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor, value::MapDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

use crate::request::Pagination;

/// Decodes an IAM XML document, keeping element text exactly as sent.
///
/// The serde deserializer trims whitespace around text nodes but passes CDATA
/// through untouched, so the text of every leaf element is rewritten as CDATA
/// before decoding.
pub(crate) fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T, DeError> {
    let verbatim = leaf_text_as_cdata(xml)?;
    quick_xml::de::from_str(&verbatim)
}

fn leaf_text_as_cdata(xml: &str) -> Result<String, DeError> {
    let mut reader = Reader::from_str(xml);
    let mut events = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            event => events.push(event),
        }
    }

    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    for (i, event) in events.iter().enumerate() {
        let is_leaf = i > 0
            && matches!(events[i - 1], Event::Start(_))
            && matches!(events.get(i + 1), Some(Event::End(_)));
        match event {
            Event::Text(text) if is_leaf => {
                let content = text.unescape()?;
                for part in cdata_parts(&content) {
                    writer.write_event(Event::CData(BytesCData::new(part)))?;
                }
            }
            event => writer.write_event(event)?,
        }
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Splits text so that no part contains the `]]>` terminator.
fn cdata_parts(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find("]]>") {
        parts.push(&rest[..idx + 2]);
        rest = &rest[idx + 2..];
    }
    parts.push(rest);
    parts
}

/// A decoded success response: the action's result plus request metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<R> {
    pub result: R,
    pub response_metadata: ResponseMetadata,
}

impl<R> Response<R> {
    /// Returns the request ID assigned by IAM.
    pub fn request_id(&self) -> &str {
        &self.response_metadata.request_id
    }

    /// Discards the metadata and returns the result.
    pub fn into_result(self) -> R {
        self.result
    }
}

impl<R> Deref for Response<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.result
    }
}

impl<'de, R: Deserialize<'de>> Deserialize<'de> for Response<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResponseVisitor(PhantomData))
    }
}

struct ResponseVisitor<R>(PhantomData<R>);

impl<'de, R: Deserialize<'de>> Visitor<'de> for ResponseVisitor<R> {
    type Value = Response<R>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an IAM <Action>Response element")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut result = None;
        let mut metadata = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == "ResponseMetadata" {
                if metadata.is_some() {
                    return Err(de::Error::duplicate_field("ResponseMetadata"));
                }
                metadata = Some(map.next_value()?);
            } else if key.ends_with("Result") {
                if result.is_some() {
                    return Err(de::Error::duplicate_field("Result"));
                }
                result = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        let response_metadata =
            metadata.ok_or_else(|| de::Error::missing_field("ResponseMetadata"))?;
        // Actions without output omit the Result element; that only decodes
        // when every field of R is optional.
        let result = match result {
            Some(result) => result,
            None => R::deserialize(MapDeserializer::<_, A::Error>::new(
                std::iter::empty::<(&str, &str)>(),
            ))?,
        };

        Ok(Response {
            result,
            response_metadata,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    pub request_id: String,
}

/// Result of actions that return nothing beyond the request ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Response-side pagination fields of a list result.
///
/// Callers drive iteration themselves: pass [`Page::next_page`] into the next
/// call until it returns `None`.
pub trait Page {
    fn is_truncated(&self) -> bool;

    /// Marker to resume from; empty on the last page.
    fn marker(&self) -> &str;

    fn next_page(&self) -> Option<Pagination> {
        if self.is_truncated() && !self.marker().is_empty() {
            Some(Pagination::after(self.marker()))
        } else {
            None
        }
    }
}

impl<R: Page> Page for Response<R> {
    fn is_truncated(&self) -> bool {
        self.result.is_truncated()
    }

    fn marker(&self) -> &str {
        self.result.marker()
    }
}

macro_rules! impl_page {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Page for $ty {
                fn is_truncated(&self) -> bool {
                    self.is_truncated
                }

                fn marker(&self) -> &str {
                    &self.marker
                }
            }
        )+
    };
}

/// `<member>` list (de)serialization, for use with `#[serde(with = "members")]`.
pub(crate) mod members {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    struct Members<T> {
        #[serde(default = "Vec::new")]
        member: Vec<T>,
    }

    #[derive(Serialize)]
    struct MembersRef<'a, T> {
        member: &'a [T],
    }

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S, T>(items: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        MembersRef { member: items }.serialize(serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Members::deserialize(deserializer).map(|m| m.member)
    }
}

/// An IAM user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub arn: String,
    pub path: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}

/// An IAM group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    pub arn: String,
    pub path: String,
    pub group_id: String,
    pub group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}

/// An IAM role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Role {
    pub arn: String,
    pub path: String,
    pub role_id: String,
    pub role_name: String,
    #[serde(default)]
    pub assume_role_policy_document: String,
    #[serde(default)]
    pub create_date: String,
}

/// An instance profile and the roles attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceProfile {
    pub arn: String,
    pub path: String,
    pub instance_profile_id: String,
    pub instance_profile_name: String,
    #[serde(default)]
    pub create_date: String,
    #[serde(default, with = "members")]
    pub roles: Vec<Role>,
}

/// An access key. `secret_access_key` is only returned by `CreateAccessKey`.
///
/// The `Debug` implementation redacts `secret_access_key` to prevent
/// accidental credential leakage in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessKey {
    pub user_name: String,
    pub access_key_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<String>,
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKey")
            .field("user_name", &self.user_name)
            .field("access_key_id", &self.access_key_id)
            .field("status", &self.status)
            .field("secret_access_key", &self.secret_access_key.as_ref().map(|_| "****"))
            .field("create_date", &self.create_date)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserResult {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserResult {
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersResult {
    #[serde(default, with = "members")]
    pub users: Vec<User>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupResult {
    pub group: Group,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupResult {
    pub group: Group,
    #[serde(default, with = "members")]
    pub users: Vec<User>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

/// Result of `ListGroups` and `ListGroupsForUser`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsResult {
    #[serde(default, with = "members")]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccessKeyResult {
    pub access_key: AccessKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccessKeysResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, with = "members")]
    pub access_key_metadata: Vec<AccessKey>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserPolicyResult {
    pub user_name: String,
    pub policy_name: String,
    pub policy_document: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupPolicyResult {
    pub group_name: String,
    pub policy_name: String,
    pub policy_document: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRolePolicyResult {
    pub role_name: String,
    pub policy_name: String,
    pub policy_document: String,
}

/// Result of `ListUserPolicies`, `ListGroupPolicies` and `ListRolePolicies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesResult {
    #[serde(default, with = "members")]
    pub policy_names: Vec<String>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoleResult {
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoleResult {
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRolesResult {
    #[serde(default, with = "members")]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetInstanceProfileResult {
    pub instance_profile: InstanceProfile,
}

/// Result of `ListInstanceProfiles` and `ListInstanceProfilesForRole`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListInstanceProfilesResult {
    #[serde(default, with = "members")]
    pub instance_profiles: Vec<InstanceProfile>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountAliasesResult {
    #[serde(default, with = "members")]
    pub account_aliases: Vec<String>,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub marker: String,
}

impl_page!(
    ListUsersResult,
    GetGroupResult,
    ListGroupsResult,
    ListAccessKeysResult,
    ListPoliciesResult,
    ListRolesResult,
    ListInstanceProfilesResult,
    ListAccountAliasesResult,
);

/// IAM `<ErrorResponse>` body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ApiErrorResponse {
    #[serde(default, rename = "Error")]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}
