//! Database row representations and their conversion to entities.

use chrono::{DateTime, Utc};
use portal_core::{
    Checkpoint, CheckpointId, Classifier, ClassifierId, MenuId, MenuItem, PasswordHistoryEntry, PasswordHistoryId,
    PortalError, UserId,
};
use sqlx::FromRow;

/// Rejects keys that no stored row can have.
fn stored_key(column: &str, value: i64) -> Result<i64, PortalError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(PortalError::mapping(format!("non-positive key {value} in column {column}")))
    }
}

/// Database row representation of a checkpoint.
#[derive(Debug, FromRow)]
pub(crate) struct CheckpointRow {
    ckp_id: i64,
    name: String,
    description: Option<String>,
}

impl TryFrom<CheckpointRow> for Checkpoint {
    type Error = PortalError;

    fn try_from(row: CheckpointRow) -> Result<Self, Self::Error> {
        Ok(Checkpoint::new(
            CheckpointId(stored_key("ckp_id", row.ckp_id)?),
            row.name,
            row.description,
        ))
    }
}

/// A menu item joined with its classifier and access list link.
#[derive(Debug, FromRow)]
pub(crate) struct MenuRow {
    mnu_id: i64,
    mnu_path: String,
    mnu_url: Option<String>,
    mnu_description: Option<String>,
    mnu_icon: Option<String>,
    mnu_root: Option<i64>,
    mnu_visible: bool,
    cla_id: i64,
    cla_value: String,
    cla_type: String,
    mnu_order: Option<i32>,
}

impl TryFrom<MenuRow> for MenuItem {
    type Error = PortalError;

    fn try_from(row: MenuRow) -> Result<Self, Self::Error> {
        Ok(MenuItem {
            id: MenuId(stored_key("mnu_id", row.mnu_id)?),
            path: row.mnu_path,
            url: row.mnu_url,
            description: row.mnu_description,
            icon: row.mnu_icon,
            // NULL and 0 both mean top level
            root: MenuId(row.mnu_root.unwrap_or(0)),
            visible: row.mnu_visible,
            classifier: Classifier::new(
                ClassifierId(stored_key("cla_id", row.cla_id)?),
                row.cla_value,
                row.cla_type,
            ),
            order: row.mnu_order,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct PassHistRow {
    pas_id: i64,
    password: String,
    change_date: DateTime<Utc>,
    usr_id: i64,
}

impl TryFrom<PassHistRow> for PasswordHistoryEntry {
    type Error = PortalError;

    fn try_from(row: PassHistRow) -> Result<Self, Self::Error> {
        Ok(PasswordHistoryEntry {
            id: Some(PasswordHistoryId(stored_key("pas_id", row.pas_id)?)),
            password: row.password,
            change_date: row.change_date,
            user_id: UserId(row.usr_id),
        })
    }
}

/// Key-only projection of `pass_hist`.
#[derive(Debug, FromRow)]
pub(crate) struct PassHistKeyRow {
    pub(crate) pas_id: i64,
}

/// Converts every row, failing on the first bad one.
pub(crate) fn into_entities<R, E>(rows: Vec<R>) -> Result<Vec<E>, PortalError>
where
    E: TryFrom<R, Error = PortalError>,
{
    rows.into_iter().map(E::try_from).collect()
}
