//! Snapshot tests for header and source generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use hdrgen_api::Api;
use hdrgen_codegen::{Generator, HeaderGenerator, SourceGenerator};

const API: &str = r##"
[api]
name = "gl"
version = "1.1"
includes = ["stddef.h"]
call = "REGAL_CALL"

[output]
category-guard = "#ifndef REGAL_NO_{}"

[[typedefs]]
name = "GLenum"
type = "unsigned int"
category = "GL_VERSION_1_0"

[[typedefs]]
name = "GLbitfield"
type = "unsigned int"
category = "GL_VERSION_1_0"

[[enumerants]]
name = "GL_ZERO"
value = 0
category = "GL_VERSION_1_0"

[[enumerants]]
name = "GL_COLOR_BUFFER_BIT"
value = "0x00004000"
category = "GL_VERSION_1_0"

[[enumerants]]
name = "GL_MULTISAMPLE_3DFX"
value = "0x86b2"
category = "GL_3DFX_multisample"
version = "1.2"

[[enumerants]]
name = "GL_SAMPLES_3DFX"
value = "0x86b4"
category = "GL_3DFX_multisample"

[[functions]]
name = "glClear"
category = "GL_VERSION_1_0"
parameters = [{ name = "mask", type = "GLbitfield" }]

[[functions]]
name = "wglGetProcAddress"
ret = "PROC"
category = "WGL_core"
condition = "#if REGAL_SYS_WGL"
parameters = [{ name = "lpszProc", type = "LPCSTR" }]

[[functions]]
name = "wglMakeCurrent"
ret = "BOOL"
category = "WGL_core"
condition = "#if REGAL_SYS_WGL"
parameters = [{ name = "hdc", type = "HDC" }, { name = "hglrc", type = "HGLRC" }]
"##;

fn api(content: &str) -> Api {
    Api::from_str(content).expect("Failed to parse API")
}

#[test]
fn test_header() {
    let api = api(API);
    let header = HeaderGenerator::new(&api).render();
    insta::assert_snapshot!(header, @r##"
#ifndef __GL_API_H__
#define __GL_API_H__

#include <stddef.h>

#if defined(__cplusplus)
extern "C" {
#endif /* defined(__cplusplus) */

/* GL_VERSION_1_0 */

typedef unsigned int GLenum;
typedef unsigned int GLbitfield;

/* GL_VERSION_1_0 */

#ifndef REGAL_NO_GL_VERSION_1_0
#define GL_ZERO             0          
#define GL_COLOR_BUFFER_BIT 0x00004000 
#endif

/* GL_3DFX_multisample */

#ifndef REGAL_NO_GL_3DFX_multisample
#define GL_SAMPLES_3DFX 0x86b4 
#endif

/* GL_VERSION_1_0 */

typedef void (REGAL_CALL *PFNGLCLEARPROC)(GLbitfield mask);

/* WGL_core */

#if REGAL_SYS_WGL
typedef PROC (REGAL_CALL *PFNWGLGETPROCADDRESSPROC)(LPCSTR lpszProc);
typedef BOOL (REGAL_CALL *PFNWGLMAKECURRENTPROC)(HDC hdc, HGLRC hglrc);
#endif

#if defined(__cplusplus)
}
#endif /* defined(__cplusplus) */

#endif /* __GL_API_H__ */
"##);
}

#[test]
fn test_source() {
    let api = api(API);
    let source = SourceGenerator::new(&api).render();
    insta::assert_snapshot!(source, @r##"
#include "gl.h"
#include <string.h>
#include <stddef.h>

const char * const gl_function_names[2] = {
  "glClear",
  NULL
};

const void *gl_function_values[2] = {
  reinterpret_cast<void *>(glClear),
  NULL
};

void *gl_lookup_function(const char *name)
{
  if (name)
  {
    const char * const *i;
    for (i = gl_function_names; *i; ++i)
    {
      if (!strcmp(name, *i))
      {
        return const_cast<void *>(gl_function_values[i - gl_function_names]);
      }
    }
  }
  return NULL;
}
"##);
}

#[test]
fn test_header_sorted_without_banner() {
    let api = api(
        r#"
[api]
name = "x"
include-guard = "X_H"
c-mode = true

[output]
banner = ""
sort-categories = true
align-defines = false

[[enumerants]]
name = "B_ONE"
value = 1
category = "b"

[[enumerants]]
name = "A_ONE"
value = 1
category = "a"

[[enumerants]]
name = "B_TWENTY"
value = 20
category = "b"

[[functions]]
name = "xFinish"
category = "b"
"#,
    );
    let header = HeaderGenerator::new(&api).notice("/* generated */\n").render();
    insta::assert_snapshot!(header, @r##"
/* generated */

#ifndef X_H
#define X_H

#if defined(__cplusplus)
extern "C" {
#endif /* defined(__cplusplus) */

#define A_ONE 1

#define B_ONE 1
#define B_TWENTY 20

typedef void (*PFNXFINISHPROC)(void);

#if defined(__cplusplus)
}
#endif /* defined(__cplusplus) */

#endif /* X_H */
"##);
}

#[test]
fn test_typedefs_sorted_without_banner() {
    let api = api(
        r#"
[api]
name = "x"
include-guard = "X_H"

[output]
banner = ""
sort-categories = true

[[typedefs]]
name = "B1"
type = "int"
category = "b"

[[typedefs]]
name = "A1"
type = "int"
category = "a"

[[typedefs]]
name = "B2"
type = "int"
category = "b"
"#,
    );
    let header = HeaderGenerator::new(&api).render();
    let a1 = header.find("typedef int A1;").expect("A1 typedef");
    let b1 = header.find("typedef int B1;").expect("B1 typedef");
    let b2 = header.find("typedef int B2;").expect("B2 typedef");
    assert!(a1 < b1 && b1 < b2);
    assert!(header.contains("typedef int A1;\n\ntypedef int B1;\ntypedef int B2;\n"));
}

#[test]
fn test_source_c_mode_skips_conditional_functions() {
    let mut api = api(API);
    api.api.c_mode = true;
    let files = SourceGenerator::new(&api).preview();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path().to_str(), Some("gl.c"));
    assert!(files[0].content().contains("  (void *)(glClear),"));
    assert!(!files[0].content().contains("wglGetProcAddress"));
    assert!(files[0].content().contains("return (void *) gl_function_values[i - gl_function_names];"));
}

#[test]
fn test_generate_skips_unchanged() {
    let api = api(API);
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let generator = HeaderGenerator::new(&api).file_name("include/gl_api.h");

    let first = generator.generate(dir.path()).expect("first generate");
    assert_eq!(first.written, vec![dir.path().join("include/gl_api.h")]);
    assert!(first.unchanged.is_empty());

    let second = generator.generate(dir.path()).expect("second generate");
    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), 1);
}
