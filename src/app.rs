// SPDX-License-Identifier: MIT

//! The `app` module runs a parsed [`Request`] against the template catalog.

use std::io::Write;

use crate::client::TemplateClient;
use crate::config::catalog::CatalogConfig;
use crate::config::runtime::{Mode, Request};
use crate::errors::Error;
use crate::output::{render_list, write_file};

/// Fetches what the [`Request`] asks for, then prints the listing or writes the `.gitignore`.
pub fn run<W: Write>(request: &Request, catalog: CatalogConfig, out: &mut W) -> Result<(), Error> {
    debug!("running request: {:?}", request);

    let client = TemplateClient::new(catalog)?;
    let payload = client.fetch(request, out)?;

    match request.mode {
        Mode::List => render_list(&payload, out),
        Mode::Get => {
            let path = write_file(&payload, &request.output_dir, out)?;
            info!("generated gitignore: {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::{parse_args, Action};
    use crate::errors::ErrorKind;
    use crate::test_utils::{closed_catalog_url, spawn_catalog, Route};

    use std::fs;
    use tempfile::tempdir;

    fn parsed(args: &[&str]) -> Request {
        match parse_args(args.iter()).unwrap() {
            Action::Execute(request) => request,
            other => panic!("expected a request, got: {:?}", other),
        }
    }

    #[test]
    fn list_prints_catalog_names() {
        let url = spawn_catalog(vec![Route::listing(r#"["FirstTemplate","SecondTemplate"]"#)]);
        let mut out = Vec::new();

        run(&parsed(&["ignore", "list"]), CatalogConfig::with_base_url(&url), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "FirstTemplate\nSecondTemplate\n");
    }

    #[test]
    fn get_writes_gitignore() {
        let url = spawn_catalog(vec![Route::template("FirstTemplate", 200, "**/.first_dir\n")]);
        let dir = tempdir().unwrap();
        let path_arg = format!("--path={}", dir.path().display());
        let mut out = Vec::new();

        run(
            &parsed(&["ignore", "get", "FirstTemplate", path_arg.as_str()]),
            CatalogConfig::with_base_url(&url),
            &mut out,
        )
        .unwrap();

        let written = dir.path().join(".gitignore");
        assert_eq!(
            fs::read_to_string(&written).unwrap(),
            "# # # FirstTemplate # # #\n**/.first_dir\n"
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!(
                "getting templates: [FirstTemplate]\nnew file: {}\n",
                written.display()
            )
        );
    }

    #[test]
    fn get_with_a_missing_template_still_succeeds() {
        let url = spawn_catalog(vec![Route::template("C", 200, "*.o\n")]);
        let dir = tempdir().unwrap();
        let request = Request {
            mode: Mode::Get,
            templates: vec!["Nope".to_owned(), "C".to_owned()],
            output_dir: dir.path().to_path_buf(),
            verbosity: 0,
        };
        let mut out = Vec::new();

        run(&request, CatalogConfig::with_base_url(&url), &mut out).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
            "# # # C # # #\n*.o\n"
        );
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("oops, got a 404, skipping! check your spelling: Nope"));
    }

    #[test]
    fn get_without_templates_writes_an_empty_file() {
        let url = spawn_catalog(vec![]);
        let dir = tempdir().unwrap();
        let request = Request {
            mode: Mode::Get,
            templates: Vec::new(),
            output_dir: dir.path().to_path_buf(),
            verbosity: 0,
        };

        run(&request, CatalogConfig::with_base_url(&url), &mut Vec::new()).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join(".gitignore")).unwrap(), "");
    }

    #[test]
    fn transport_failure_writes_nothing() {
        let dir = tempdir().unwrap();
        let request = Request {
            mode: Mode::Get,
            templates: vec!["C".to_owned()],
            output_dir: dir.path().to_path_buf(),
            verbosity: 0,
        };

        let err = run(&request, CatalogConfig::with_base_url(&closed_catalog_url()), &mut Vec::new())
            .unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::Transport);
        assert!(!dir.path().join(".gitignore").exists());
    }
}
