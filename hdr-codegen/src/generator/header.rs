//! C header generation.

use hdrgen_api::{Api, Function};
use hdrgen_core::{CodeBlock, OutputFile, list_to_string, valid_version};
use tracing::debug;

use super::{Generator, flatten, push_section};
use crate::align::align_define_category;
use crate::category::{CategoryLine, Guard, if_category};
use crate::condition::condition_lines;
use crate::format::{define_code, func_proto_code, header_code, typedef_code};
use crate::wrap::wrap_if;

const CPLUSPLUS: &str = "defined(__cplusplus)";

/// Generates the API header: typedefs, enumerant `#define`s and
/// `PFN...PROC` pointer typedefs, grouped by category.
///
/// ```text
/// #ifndef __GL_API_H__
/// #define __GL_API_H__
///
/// #include <stddef.h>
///
/// #if defined(__cplusplus)
/// extern "C" {
/// #endif /* defined(__cplusplus) */
///
/// /* GL_VERSION_1_0 */
///
/// typedef unsigned int GLenum;
/// ...
/// ```
pub struct HeaderGenerator<'a> {
    api: &'a Api,
    file_name: String,
    notice: Option<String>,
}

impl<'a> HeaderGenerator<'a> {
    /// A generator writing `<name>.h`.
    pub fn new(api: &'a Api) -> Self {
        Self {
            api,
            file_name: format!("{}.h", api.api.name),
            notice: None,
        }
    }

    /// Override the output file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Comment placed at the very top of the file.
    pub fn notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }

    /// Render the header text.
    pub fn render(&self) -> String {
        let config = &self.api.api;
        let guard = config.include_guard();
        let mut out: Vec<String> = Vec::new();

        if let Some(notice) = &self.notice {
            out.extend(notice.lines().map(str::to_string));
            out.push(String::new());
        }
        out.push(format!("#ifndef {guard}"));
        out.push(format!("#define {guard}"));

        let includes = header_code(&config.includes);
        push_section(&mut out, includes.lines().map(str::to_string).collect());

        let open = wrap_if(CPLUSPLUS, CodeBlock::from(["extern \"C\" {"]), None);
        push_section(&mut out, open.into_lines());

        push_section(&mut out, self.typedef_section());
        push_section(&mut out, self.define_section());
        push_section(&mut out, self.prototype_section());

        let close = wrap_if(CPLUSPLUS, CodeBlock::from(["}"]), None);
        push_section(&mut out, close.into_lines());
        push_section(&mut out, vec![format!("#endif /* {guard} */")]);

        list_to_string(&out)
    }

    fn typedef_section(&self) -> Vec<String> {
        let config = &self.api.api;
        let lines: Vec<CategoryLine> = self
            .api
            .typedefs
            .iter()
            .map(|t| (t, typedef_code(t, config.version, config.c_mode)))
            .filter(|(_, code)| !code.is_empty())
            .map(|(t, code)| CategoryLine::new(t.category.as_str(), code.trim_end()))
            .collect();
        debug!(count = lines.len(), "typedefs");
        flatten(lines, &self.api.output)
    }

    fn define_section(&self) -> Vec<String> {
        let output = &self.api.output;
        let mut lines: Vec<CategoryLine> = self
            .api
            .enumerants
            .iter()
            .filter(|e| valid_version(e.version, self.api.api.version))
            .map(|e| CategoryLine::new(e.category.as_str(), define_code(e)))
            .collect();
        debug!(count = lines.len(), "enumerant defines");

        if output.sort_categories {
            lines.sort_by(|l, r| l.category.cmp(&r.category));
        }
        if output.align_defines {
            lines = align_define_category(lines);
        }
        if let Some(template) = output.category_guard.as_deref() {
            lines = if_category(lines, &Guard::template(template));
        }
        flatten(lines, output)
    }

    fn prototype_section(&self) -> Vec<String> {
        let config = &self.api.api;
        let mut protos: Vec<(&Function, String)> = self
            .api
            .functions
            .iter()
            .map(|f| {
                let code = func_proto_code(f, config.version, config.call.as_deref(), config.c_mode);
                (f, code)
            })
            .filter(|(_, code)| !code.is_empty())
            .collect();
        debug!(count = protos.len(), "function prototypes");

        if self.api.output.sort_categories {
            protos.sort_by(|(l, _), (r, _)| l.category.cmp(&r.category));
        }

        // Platform conditions never span two categories.
        let mut lines = Vec::with_capacity(protos.len());
        for group in protos.chunk_by(|(l, _), (r, _)| l.category == r.category) {
            let category = group[0].0.category.as_str();
            let blocks = group
                .iter()
                .map(|(f, code)| (f.condition.as_str(), vec![code.clone()]));
            lines.extend(
                condition_lines(blocks)
                    .into_iter()
                    .map(|line| CategoryLine::new(category, line)),
            );
        }
        flatten(lines, &self.api.output)
    }
}

impl Generator for HeaderGenerator<'_> {
    fn name(&self) -> &'static str {
        "header"
    }

    fn preview(&self) -> Vec<OutputFile> {
        vec![OutputFile::new(&self.file_name, self.render())]
    }
}
