//! Result items merged across backends.

use super::PayloadError;
use crate::workspace::domain::{
    BackendUri, Hover, Location, NamespaceTranslator, SymbolInformation,
};
use serde::Serialize;

/// One element of a backend answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryItem {
    /// A workspace symbol.
    Symbol(SymbolInformation),
    /// A reference location.
    Location(Location),
    /// Hover information.
    Hover(Hover),
}

impl QueryItem {
    /// Rewrites every embedded resource identifier from the backend
    /// namespace into the workspace namespace.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Translation`] when an identifier lies outside
    /// the workspace or is malformed.
    pub fn into_workspace_namespace(
        self,
        translator: &NamespaceTranslator,
    ) -> Result<Self, PayloadError> {
        match self {
            Self::Symbol(mut symbol) => {
                symbol.location = translate_location(symbol.location, translator)?;
                Ok(Self::Symbol(symbol))
            }
            Self::Location(location) => {
                Ok(Self::Location(translate_location(location, translator)?))
            }
            Self::Hover(hover) => Ok(Self::Hover(hover)),
        }
    }

    /// Returns the symbol, if this item is one.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<&SymbolInformation> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Returns the location, if this item is one.
    #[must_use]
    pub const fn as_location(&self) -> Option<&Location> {
        match self {
            Self::Location(location) => Some(location),
            _ => None,
        }
    }

    /// Returns the hover, if this item is one.
    #[must_use]
    pub const fn as_hover(&self) -> Option<&Hover> {
        match self {
            Self::Hover(hover) => Some(hover),
            _ => None,
        }
    }

    /// Consumes the item, returning the symbol if it is one.
    #[must_use]
    pub fn into_symbol(self) -> Option<SymbolInformation> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Consumes the item, returning the location if it is one.
    #[must_use]
    pub fn into_location(self) -> Option<Location> {
        match self {
            Self::Location(location) => Some(location),
            _ => None,
        }
    }

    /// Consumes the item, returning the hover if it is one.
    #[must_use]
    pub fn into_hover(self) -> Option<Hover> {
        match self {
            Self::Hover(hover) => Some(hover),
            _ => None,
        }
    }
}

fn translate_location(
    location: Location,
    translator: &NamespaceTranslator,
) -> Result<Location, PayloadError> {
    let path = translator.to_workspace_path(&BackendUri::new(location.uri))?;
    Ok(Location {
        uri: path.into(),
        range: location.range,
    })
}
