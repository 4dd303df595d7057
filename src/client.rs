// SPDX-License-Identifier: MIT

//! The `client` module defines [`TemplateClient`], the blocking HTTP client of the template catalog.

use std::io::Write;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;

use crate::config::catalog::CatalogConfig;
use crate::config::runtime::{Mode, Request};
use crate::errors::{Error, ErrorKind};

/// Responsible for all communication with the template catalog.
///
/// Requests are issued one at a time, in order; nothing is retried.
pub struct TemplateClient {
    client: Client,
    catalog: CatalogConfig,
}

/// Method implementations for [`TemplateClient`].
impl TemplateClient {
    /// Creates a new [`TemplateClient`] sending the catalog's `User-Agent` with every request.
    pub fn new(catalog: CatalogConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&catalog.user_agent).map_err(|err| Error::new(ErrorKind::Other, err))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| Error::new(ErrorKind::Transport, err))?;

        Ok(Self { client, catalog })
    }

    /// Fetches the raw payload for a [`Request`].
    ///
    /// [`Mode::List`] yields the catalog's JSON listing, [`Mode::Get`] the concatenated templates.
    /// Progress and skipped templates are reported on `out`.
    pub fn fetch<W: Write>(&self, request: &Request, out: &mut W) -> Result<Vec<u8>, Error> {
        match request.mode {
            Mode::List => self.list_templates(),
            Mode::Get => self.get_templates(&request.templates, out),
        }
    }

    /// Fetches the JSON array of available template names.
    pub fn list_templates(&self) -> Result<Vec<u8>, Error> {
        let url = self.catalog.listing_url()?;
        debug!("requesting template listing: {}", url);

        let response = self.client.get(url).send().map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::with_message(
                ErrorKind::CatalogStatus,
                format!("The template catalog answered the listing with {}", status),
            ));
        }

        let body = response.bytes().map_err(transport)?;
        debug!("received {} byte listing", body.len());

        Ok(body.to_vec())
    }

    /// Fetches each template in turn, concatenating the successful ones behind a header line.
    ///
    /// A template answered with anything but `200 OK` is reported on `out` and skipped.
    pub fn get_templates<W: Write>(&self, templates: &[String], out: &mut W) -> Result<Vec<u8>, Error> {
        writeln!(out, "getting templates: [{}]", templates.join(" "))
            .map_err(|err| Error::new(ErrorKind::WriteOutput, err))?;

        let mut buffer = Vec::new();

        for template in templates {
            let url = self.catalog.template_url(template)?;
            debug!("requesting template: {}", url);

            let response = self
                .client
                .get(url)
                .header(ACCEPT, self.catalog.raw_media_type.as_str())
                .send()
                .map_err(transport)?;

            let status = response.status();
            if status != StatusCode::OK {
                info!("skipping template {}, status: {}", template, status);
                writeln!(
                    out,
                    "oops, got a {}, skipping! check your spelling: {}",
                    status.as_u16(),
                    template
                )
                .map_err(|err| Error::new(ErrorKind::WriteOutput, err))?;
                continue;
            }

            let body = response.bytes().map_err(transport)?;
            trace!("template {}: {} bytes", template, body.len());

            buffer.extend_from_slice(format!("# # # {} # # #\n", template).as_bytes());
            buffer.extend_from_slice(&body);
        }

        Ok(buffer)
    }
}

fn transport(err: reqwest::Error) -> Error {
    Error::new(ErrorKind::Transport, err)
}
