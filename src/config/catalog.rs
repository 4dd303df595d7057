// SPDX-License-Identifier: MIT

//! The `catalog` module defines [`CatalogConfig`], the location of the remote template catalog.
//!
//! There is no config file; the defaults below are the only source of values outside of tests.

use reqwest::Url;

use crate::config::cli::APP_NAME;
use crate::errors::Error;

/// Constant specifying the catalog host serving gitignore templates.
const DEFAULT_CATALOG_URL: &str = "https://api.github.com";

/// Constant specifying the catalog path listing template names, templates live beneath it.
const TEMPLATES_PATH: &str = "gitignore/templates";

/// Constant specifying the media type requesting a template's raw text instead of JSON.
pub const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";

/// Constant specifying the name of the generated file.
pub const OUTPUT_FILE: &str = ".gitignore";

/// `struct` containing the catalog's endpoint details.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Scheme & host of the catalog, e.g. `https://api.github.com`.
    pub base_url: String,

    /// Path of the template listing relative to `base_url`.
    pub templates_path: String,

    /// Value of the `Accept` header sent when fetching a single template.
    pub raw_media_type: String,

    /// Value of the `User-Agent` header sent with every request.
    pub user_agent: String,
}

/// [`std::Default`] trait implementation for [`CatalogConfig`].
impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_owned(),
            templates_path: TEMPLATES_PATH.to_owned(),
            raw_media_type: RAW_MEDIA_TYPE.to_owned(),
            user_agent: format!("{}/{}", APP_NAME, crate_version!()),
        }
    }
}

/// Method implementations for [`CatalogConfig`].
impl CatalogConfig {
    /// Creates a [`CatalogConfig`] pointing at an alternative catalog host.
    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            ..Self::default()
        }
    }

    /// Returns the URL listing all template names.
    pub fn listing_url(&self) -> Result<Url, Error> {
        self.endpoint(None)
    }

    /// Returns the URL of a single template, `name` is appended as one path segment.
    pub fn template_url(&self, name: &str) -> Result<Url, Error> {
        self.endpoint(Some(name))
    }

    fn endpoint(&self, template: Option<&str>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_url).map_err(|err| {
            Error::from(format!("Invalid catalog URL {:?}: {}", self.base_url, err))
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::from(format!("Catalog URL {:?} cannot hold a path", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(self.templates_path.split('/').filter(|seg| !seg.is_empty()));
            if let Some(name) = template {
                segments.push(name);
            }
        }

        Ok(url)
    }
}
