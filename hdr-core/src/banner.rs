//! The "do not edit" banner placed at the top of every generated file.

/// Arguments whose value is a file path, shortened to its basename in banners.
const FILE_FLAGS: &[&str] = &["-o", "--output", "--header", "--source"];

/// Last component of `path`, treating both `/` and `\` as separators.
pub fn path_basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Describe the command line that produced a file.
///
/// The program name and the values of output-path flags are reduced to their
/// basenames so the banner does not depend on the build directory.
pub fn auto_generated_code<S: AsRef<str>>(args: &[S]) -> String {
    let Some((program, rest)) = args.split_first() else {
        return String::new();
    };

    let mut message = path_basename(program.as_ref()).to_string();
    let mut arg_is_file = false;
    for arg in rest {
        let arg = arg.as_ref();
        message.push(' ');
        if arg_is_file {
            message.push_str(path_basename(arg));
            arg_is_file = false;
        } else {
            message.push_str(arg);
            arg_is_file = FILE_FLAGS.contains(&arg);
        }
    }
    message
}

/// The banner comment for a file generated by the given command line.
pub fn auto_generated_message<S: AsRef<str>>(args: &[S]) -> String {
    format!(
        "/* NOTE: Do not edit this file, it is generated by a script:\n   {}\n*/\n",
        auto_generated_code(args)
    )
}
