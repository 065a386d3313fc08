//! Table and column identifiers.

use portal_config::ConfigValidator;
use portal_core::{PortalError, PortalResult};
use sea_query::{Alias, Iden, IntoIden, TableRef};

/// Tables of the portal schema, before prefixing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Checkpoint,
    AccessListCheckpoint,
    AccessListMenu,
    Menu,
    Classifier,
    PassHist,
}

impl Table {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checkpoint => "checkpoint",
            Self::AccessListCheckpoint => "access_list_checkpoint",
            Self::AccessListMenu => "access_list_menu",
            Self::Menu => "menu",
            Self::Classifier => "classifier",
            Self::PassHist => "pass_hist",
        }
    }
}

/// Aliases used in joined selects.
#[derive(Iden, Clone, Copy)]
pub enum As {
    #[iden = "c"]
    Checkpoint,
    #[iden = "alc"]
    CheckpointLink,
    #[iden = "m"]
    Menu,
    #[iden = "cl"]
    Classifier,
    #[iden = "alm"]
    MenuLink,
}

#[derive(Iden, Clone, Copy)]
pub enum CheckpointCol {
    CkpId,
    Name,
    Description,
}

#[derive(Iden, Clone, Copy)]
pub enum MenuCol {
    MnuId,
    MnuPath,
    MnuUrl,
    MnuDescription,
    MnuIcon,
    MnuRoot,
    MnuVisible,
    ClaId,
}

#[derive(Iden, Clone, Copy)]
pub enum ClassifierCol {
    ClaId,
    ClaValue,
    ClaType,
}

/// Columns of both link tables.
#[derive(Iden, Clone, Copy)]
pub enum LinkCol {
    AclId,
    CkpId,
    MnuId,
    MnuOrder,
}

#[derive(Iden, Clone, Copy)]
pub enum PassHistCol {
    PasId,
    Password,
    ChangeDate,
    UsrId,
}

/// Resolves tables under the configured prefix.
///
/// Everything up to the last `.` names the schema (`portal.` gives
/// `` `portal`.`menu` ``); the rest is prepended to the table name
/// (`adm_` gives `` `adm_menu` ``).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableNames {
    prefix: String,
}

impl TableNames {
    /// Creates table names with the given prefix.
    pub fn new(prefix: impl Into<String>) -> PortalResult<Self> {
        let prefix = prefix.into();
        if !ConfigValidator::is_valid_table_prefix(&prefix) {
            return Err(PortalError::statement(format!("invalid table prefix '{prefix}'")));
        }
        Ok(Self { prefix })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Table reference for statements.
    #[must_use]
    pub fn table_ref(&self, table: Table) -> TableRef {
        match self.prefix.rsplit_once('.') {
            Some((schema, rest)) if !schema.is_empty() => TableRef::SchemaTable(
                Alias::new(schema).into_iden(),
                Alias::new(format!("{rest}{}", table.name())).into_iden(),
            ),
            Some((_, rest)) => TableRef::Table(Alias::new(format!("{rest}{}", table.name())).into_iden()),
            None => TableRef::Table(Alias::new(self.qualified(table)).into_iden()),
        }
    }

    /// Prefixed name as written in configuration, for logs and errors.
    #[must_use]
    pub fn qualified(&self, table: Table) -> String {
        format!("{}{}", self.prefix, table.name())
    }
}
