//! Users Service
//!
//! Unary wrappers for account and user-level queries.

use marketgate_contract::users::users_service_client::UsersServiceClient;
use marketgate_contract::users::{
    Account, GetAccountsRequest, GetInfoRequest, GetInfoResponse, GetMarginAttributesRequest,
    GetMarginAttributesResponse, GetUserTariffRequest, GetUserTariffResponse,
};

use crate::error::SdkError;
use crate::transport::AuthedChannel;

/// Users service wrappers.
///
/// Cheap to clone; every call clones the underlying client, so `&self`
/// methods can run concurrently.
#[derive(Clone)]
pub struct UsersService {
    client: UsersServiceClient<AuthedChannel>,
    sandbox: bool,
}

impl UsersService {
    pub(crate) fn new(client: UsersServiceClient<AuthedChannel>, sandbox: bool) -> Self {
        Self { client, sandbox }
    }

    /// List the accounts available to the token.
    ///
    /// # Errors
    ///
    /// Returns the gRPC status on call failure.
    pub async fn get_accounts(&self) -> Result<Vec<Account>, SdkError> {
        let mut client = self.client.clone();
        let response = client.get_accounts(GetAccountsRequest {}).await?;
        Ok(response.into_inner().accounts)
    }

    /// Margin attributes for one account.
    ///
    /// # Errors
    ///
    /// Not served by the sandbox environment; fails with
    /// [`SdkError::SandboxUnsupported`] before any network I/O there.
    /// Otherwise returns the gRPC status on call failure.
    pub async fn get_margin_attributes(
        &self,
        account_id: &str,
    ) -> Result<GetMarginAttributesResponse, SdkError> {
        if self.sandbox {
            return Err(SdkError::SandboxUnsupported {
                method: "GetMarginAttributes",
            });
        }
        let mut client = self.client.clone();
        let request = GetMarginAttributesRequest {
            account_id: account_id.to_owned(),
        };
        Ok(client.get_margin_attributes(request).await?.into_inner())
    }

    /// Request and stream limits of the token's tariff.
    ///
    /// # Errors
    ///
    /// Returns the gRPC status on call failure.
    pub async fn get_user_tariff(&self) -> Result<GetUserTariffResponse, SdkError> {
        let mut client = self.client.clone();
        Ok(client.get_user_tariff(GetUserTariffRequest {}).await?.into_inner())
    }

    /// User flags and tariff name.
    ///
    /// # Errors
    ///
    /// Returns the gRPC status on call failure.
    pub async fn get_info(&self) -> Result<GetInfoResponse, SdkError> {
        let mut client = self.client.clone();
        Ok(client.get_info(GetInfoRequest {}).await?.into_inner())
    }
}
