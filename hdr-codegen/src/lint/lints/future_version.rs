//! Lint for entities the target version will skip.

use hdrgen_api::Api;
use hdrgen_core::{Version, valid_version};

use crate::lint::{Diagnostic, Lint};

/// Lint that warns about entities newer than the target API version.
pub struct FutureVersionLint;

impl Lint for FutureVersionLint {
    fn name(&self) -> &'static str {
        "future-version"
    }

    fn description(&self) -> &'static str {
        "Warn about entities newer than the target version"
    }

    fn check(&self, api: &Api, diagnostics: &mut Vec<Diagnostic>) {
        let Some(target) = api.api.version else {
            return;
        };

        let entities = api
            .enumerants
            .iter()
            .map(|e| ("enumerants", e.name.as_str(), e.version))
            .chain(
                api.typedefs
                    .iter()
                    .map(|t| ("typedefs", t.name.as_str(), t.version)),
            )
            .chain(
                api.functions
                    .iter()
                    .map(|f| ("functions", f.name.as_str(), f.version)),
            );

        for (list, name, version) in entities {
            if let Some(version) = skipped(version, target) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "'{}' requires version {} but the target is {}; it will be skipped",
                            name, version, target
                        ),
                    )
                    .at(format!("{}.{}", list, name)),
                );
            }
        }
    }
}

fn skipped(version: Option<Version>, target: Version) -> Option<Version> {
    version.filter(|_| !valid_version(version, Some(target)))
}
