use crate::config::{ProjectManifest, MANIFEST_FILE};
use crate::error::{ManifestError, Result};
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use std::path::Path;

impl ProjectManifest {
    /// Load the manifest from layered sources.
    /// Priority: environment variables > manifest file > defaults
    ///
    /// Environment variables use a double-underscore separator between the
    /// table and the field because field names themselves contain single
    /// underscores: `GANTRY_ASSEMBLY__ENVIRONMENT=prod`,
    /// `GANTRY_LAYOUT__APP_ENTRY=web/boot.ts`.
    pub fn load(manifest_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        // An explicit --manifest must exist; the default location is optional
        match manifest_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ManifestError::NotFound(path.to_path_buf()).into());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let default_path = Path::new(MANIFEST_FILE);
                if default_path.is_file() {
                    figment = figment.merge(Toml::file(default_path));
                }
            }
        }

        // Merge environment variables (GANTRY_ASSEMBLY__ENVIRONMENT, etc.)
        figment = figment.merge(Env::prefixed("GANTRY_").split("__"));

        figment.extract().map_err(|e| {
            ManifestError::Invalid {
                message: e.to_string(),
                hint: "Check gantry.toml syntax and field types".to_string(),
            }
            .into()
        })
    }
}
