//! C/C++ source generation: a name-to-function-pointer lookup table.

use hdrgen_api::Api;
use hdrgen_core::{CodeBlock, DEFAULT_INDENT, OutputFile, indent_lines, list_to_string, valid_version};
use tracing::debug;

use super::{Generator, push_section};
use crate::format::{DEFAULT_VALUE_CAST, header_code, pointer_lookup_by_name_code};
use crate::wrap::wrap_c_if;

const C_VALUE_CAST: &str = "(void *)({})";

/// Generates a source file mapping function names to their addresses.
///
/// Functions behind a platform condition or newer than the target version
/// are left out of the table.
pub struct SourceGenerator<'a> {
    api: &'a Api,
    header_name: String,
    file_name: String,
    notice: Option<String>,
}

impl<'a> SourceGenerator<'a> {
    /// A generator writing `<name>.cpp` (`<name>.c` in C mode) that includes `<name>.h`.
    pub fn new(api: &'a Api) -> Self {
        let name = &api.api.name;
        let extension = if api.api.c_mode { "c" } else { "cpp" };
        Self {
            api,
            header_name: format!("{name}.h"),
            file_name: format!("{name}.{extension}"),
            notice: None,
        }
    }

    /// Override the output file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// The header the source includes.
    pub fn header_name(mut self, header_name: impl Into<String>) -> Self {
        self.header_name = header_name.into();
        self
    }

    /// Comment placed at the very top of the file.
    pub fn notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    fn names_var(&self) -> String {
        format!("{}_function_names", self.api.api.name)
    }

    fn values_var(&self) -> String {
        format!("{}_function_values", self.api.api.name)
    }

    /// Render the source text.
    pub fn render(&self) -> String {
        let config = &self.api.api;
        let mut out: Vec<String> = Vec::new();

        if let Some(notice) = &self.notice {
            out.extend(notice.lines().map(str::to_string));
        }

        let header = format!("\"{}\"", self.header_name);
        let includes = header_code(&[header.as_str(), "string.h", "stddef.h"]);
        push_section(&mut out, includes.lines().map(str::to_string).collect());

        let entries: Vec<(&str, &str)> = self
            .api
            .functions
            .iter()
            .filter(|f| f.condition.trim().is_empty() && valid_version(f.version, config.version))
            .map(|f| (f.name.as_str(), f.name.as_str()))
            .collect();
        debug!(count = entries.len(), "lookup entries");

        let cast = if config.c_mode { C_VALUE_CAST } else { DEFAULT_VALUE_CAST };
        let names = self.names_var();
        let values = self.values_var();
        push_section(
            &mut out,
            pointer_lookup_by_name_code(&entries, (names.as_str(), values.as_str()), cast),
        );
        out.extend(self.lookup_function());

        list_to_string(&out)
    }

    /// `void *<name>_lookup_function(const char *name)` scanning the name table.
    fn lookup_function(&self) -> Vec<String> {
        let names = self.names_var();
        let values = self.values_var();
        let found = if self.api.api.c_mode {
            format!("return (void *) {values}[i - {names}];")
        } else {
            format!("return const_cast<void *>({values}[i - {names}]);")
        };

        let mut search = vec![
            "const char * const *i;".to_string(),
            format!("for (i = {names}; *i; ++i)"),
            "{".to_string(),
        ];
        let matched = wrap_c_if("!strcmp(name, *i)", CodeBlock::from(vec![found]), None);
        search.extend(indent_lines(&matched.into_lines(), DEFAULT_INDENT));
        search.push("}".to_string());

        let mut body = wrap_c_if("name", CodeBlock::Lines(search), None).into_lines();
        body.push("return NULL;".to_string());

        let mut code = vec![
            format!("void *{}_lookup_function(const char *name)", self.api.api.name),
            "{".to_string(),
        ];
        code.extend(indent_lines(&body, DEFAULT_INDENT));
        code.push("}".to_string());
        code
    }
}

impl Generator for SourceGenerator<'_> {
    fn name(&self) -> &'static str {
        "source"
    }

    fn preview(&self) -> Vec<OutputFile> {
        vec![OutputFile::new(&self.file_name, self.render())]
    }
}
