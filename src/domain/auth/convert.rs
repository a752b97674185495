//! Conversions from auth wire types to [`User`].

use chrono::{DateTime, TimeZone, Utc};

use super::wire::{LoginResponse, MeResponse};
use super::User;
use crate::error::ConversionError;
use crate::shared::PubkeyStr;

impl TryFrom<LoginResponse> for User {
    type Error = ConversionError;

    fn try_from(resp: LoginResponse) -> Result<Self, Self::Error> {
        Ok(User {
            id: required_id(resp.user_id)?,
            wallet_address: required_address(resp.wallet_address)?,
            linked_account: resp.linked_account,
            embedded_wallet: resp.embedded_wallet,
            x_username: resp.x_username,
            x_display_name: resp.x_display_name,
            expires_at: parse_expires_at(resp.expires_at)?,
        })
    }
}

impl TryFrom<MeResponse> for User {
    type Error = ConversionError;

    fn try_from(me: MeResponse) -> Result<Self, Self::Error> {
        Ok(User {
            id: required_id(me.user_id)?,
            wallet_address: required_address(me.wallet_address)?,
            linked_account: me.linked_account,
            embedded_wallet: me.embedded_wallet,
            x_username: me.x_username,
            x_display_name: me.x_display_name,
            expires_at: parse_expires_at(me.expires_at)?,
        })
    }
}

fn required_id(id: String) -> Result<String, ConversionError> {
    if id.trim().is_empty() {
        return Err(ConversionError::MissingField("user_id"));
    }
    Ok(id)
}

fn required_address(address: String) -> Result<PubkeyStr, ConversionError> {
    let address = PubkeyStr::from(address);
    if address.is_empty() {
        return Err(ConversionError::MissingField("wallet_address"));
    }
    Ok(address)
}

fn parse_expires_at(timestamp: i64) -> Result<DateTime<Utc>, ConversionError> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or(ConversionError::InvalidTimestamp(timestamp))
}
