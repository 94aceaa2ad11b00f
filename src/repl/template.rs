//! Source generation.
//!
//! Each run of the shell regenerates the whole main source file from the
//! session buffers: a fixed per-language scaffold with the session's
//! header lines, class lines and main lines spliced in. The scaffolds
//! define short print helpers (`p`, `pf`, and for C some regex match
//! helpers) so one-liners stay one-liners.

use crate::lexer::Language;
use crate::repl::session::Session;

/// Normalize a `#include` argument: already-quoted (`"x.h"`) and angled
/// (`<x.h>`) forms pass through, anything else gets double quotes.
pub fn quote_header(header: &str) -> String {
    let quoted = (header.starts_with('"') && header.ends_with('"') && header.len() >= 3)
        || (header.starts_with('<') && header.ends_with('>') && header.len() >= 3);
    if quoted {
        header.to_string()
    } else {
        format!("\"{header}\"")
    }
}

/// Render the complete main source for the session.
pub fn render_main(session: &Session) -> String {
    match session.language() {
        Language::C => render_c(session),
        Language::Cpp => render_cpp(session),
        Language::ObjectiveC => render_objc(session),
        Language::Java => render_java(session),
        Language::CSharp => render_csharp(session),
    }
}

fn push_lines(out: &mut String, lines: &[String], indent: &str) {
    for line in lines {
        out.push_str(indent);
        out.push_str(line);
        out.push('\n');
    }
}

/// A header line that names a file (from `#include`) becomes an `#include`
/// directive; a full source line (a `#define`, a typedef, an extern
/// declaration) is emitted as written.
fn looks_like_header_name(line: &str) -> bool {
    let quoted = (line.starts_with('<') && line.ends_with('>'))
        || (line.starts_with('"') && line.ends_with('"'));
    quoted
        || (!line.starts_with('#')
            && !line.ends_with(';')
            && !line.contains(char::is_whitespace))
}

fn push_includes(out: &mut String, headers: &[String]) {
    for header in headers {
        if looks_like_header_name(header) {
            out.push_str("#include ");
            out.push_str(&quote_header(header));
        } else {
            out.push_str(header);
        }
        out.push('\n');
    }
}

const C_HELPERS: &str = r#"
void
p(char *msg) {
  puts(msg);
}

void
pf(char *fmt, ...) {
  va_list ap;
  va_start(ap, fmt);
  vprintf(fmt, ap);
}

int
match_opts(char *pattern, char *str, int opts) {
  regex_t re;
  if(regcomp(&re, pattern, opts)) {
    p("error in regex");
    return(-1);
  }
  int retval = (regexec(&re, str, (size_t)0, NULL, 0) == 0);
  regfree(&re);
  return(retval);
}

int
match(char *pattern, char *str) {
  return(match_opts(pattern, str, REG_EXTENDED));
}

int
matchi(char *pattern, char *str) {
  return(match_opts(pattern, str, REG_EXTENDED | REG_ICASE));
}

int
matchm(char *pattern, char *str) {
  return(match_opts(pattern, str, REG_EXTENDED | REG_NEWLINE));
}
"#;

fn render_c(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("#include <stdio.h>\n");
    out.push_str("#include <stdarg.h>\n");
    out.push_str("#include <stdlib.h>\n");
    out.push_str("#include <regex.h>\n");
    push_includes(&mut out, &session.header_lines);
    out.push_str(C_HELPERS);
    out.push('\n');
    push_lines(&mut out, &session.class_lines, "");
    out.push_str("\nint\nmain (int argc, char **argv) {\n");
    push_lines(&mut out, &session.main_lines, "  ");
    out.push_str("  return 0;\n}\n");
    out
}

fn render_cpp(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("#include <iostream>\n");
    out.push_str("#include <cstdarg>\n");
    out.push_str("#include <cstdio>\n");
    push_includes(&mut out, &session.header_lines);
    out.push_str("using namespace std;\n");
    out.push_str(
        r#"
void
p(const char *msg) {
  puts(msg);
}

void
pf(const char *fmt, ...) {
  va_list ap;
  va_start(ap, fmt);
  vprintf(fmt, ap);
}
"#,
    );
    out.push('\n');
    push_lines(&mut out, &session.class_lines, "");
    out.push_str("\nint main() {\n");
    push_lines(&mut out, &session.main_lines, "  ");
    out.push_str("  return 0;\n}\n");
    out
}

fn render_objc(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("#import <Foundation/Foundation.h>\n");
    push_includes(&mut out, &session.header_lines);
    out.push_str(
        r#"
void
p(char *msg) {
  puts(msg);
}

void
ps(NSString *s) {
  puts([s UTF8String]);
}

void
pf(char *fmt, ...) {
  va_list ap;
  va_start(ap, fmt);
  vprintf(fmt, ap);
}
"#,
    );
    out.push('\n');
    push_lines(&mut out, &session.class_lines, "");
    out.push_str("\nint main (int argc, const char * argv[]) {\n");
    out.push_str("  NSAutoreleasePool * pool = [[NSAutoreleasePool alloc] init];\n");
    push_lines(&mut out, &session.main_lines, "  ");
    out.push_str("  [pool drain];\n  return 0;\n}\n");
    out
}

fn render_java(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("import static java.lang.System.out;\n\n");
    push_lines(&mut out, &session.header_lines, "");
    out.push_str("\npublic class Main {\n\n");
    out.push_str(
        "  public static void p(String msg) {\n    System.out.println(msg);\n  }\n\n",
    );
    out.push_str(
        "  public static void pf(String fmt) {\n    System.out.printf(fmt);\n  }\n",
    );
    // pf overloads for one to five format arguments
    for arity in 1..=5 {
        let params: Vec<String> = (1..=arity).map(|i| format!("Object o{i}")).collect();
        let args: Vec<String> = (1..=arity).map(|i| format!("o{i}")).collect();
        out.push_str(&format!(
            "\n  public static void pf(String fmt, {}) {{\n    System.out.printf(fmt, {});\n  }}\n",
            params.join(", "),
            args.join(", ")
        ));
    }
    out.push('\n');
    push_lines(&mut out, &session.class_lines, "  ");
    out.push_str("\n  public static void main(String[] args) {\n");
    push_lines(&mut out, &session.main_lines, "    ");
    out.push_str("  }\n}\n");
    out
}

fn render_csharp(session: &Session) -> String {
    let mut out = String::new();
    push_lines(&mut out, &session.header_lines, "");
    out.push_str("\npublic class Top {\n");
    out.push_str(
        "  public static void p(System.String msg) {\n    System.Console.WriteLine(msg);\n  }\n\n",
    );
    out.push_str(
        "  public static void pf(System.String fmt, params object[] list) {\n    System.Console.WriteLine(string.Format(fmt, list));\n  }\n\n",
    );
    push_lines(&mut out, &session.class_lines, "  ");
    out.push_str("\n  public static void Main(string[] args) {\n");
    push_lines(&mut out, &session.main_lines, "    ");
    out.push_str("  }\n}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::session::Location;

    #[test]
    fn quote_header_normalizes() {
        assert_eq!(quote_header("stdio.h"), "\"stdio.h\"");
        assert_eq!(quote_header("\"util.h\""), "\"util.h\"");
        assert_eq!(quote_header("<stdio.h>"), "<stdio.h>");
    }

    #[test]
    fn c_source_splices_all_buffers() {
        let mut sess = Session::new(Language::C);
        sess.add("util.h", Location::Header);
        sess.add("int twice(int n) { return 2 * n; }", Location::Class);
        sess.add("pf(\"%d\\n\", twice(21));", Location::Auto);
        let source = render_main(&sess);
        assert!(source.contains("#include \"util.h\""));
        assert!(source.contains("int twice(int n) { return 2 * n; }"));
        assert!(source.contains("  pf(\"%d\\n\", twice(21));"));
        assert!(source.contains("int\nmain (int argc, char **argv) {"));
        assert!(source.ends_with("  return 0;\n}\n"));
    }

    #[test]
    fn c_header_lines_that_are_code_render_verbatim() {
        let mut sess = Session::new(Language::C);
        sess.add("<math.h>", Location::Header);
        sess.add("typedef int myint;", Location::Header);
        sess.add("#define LIMIT 16", Location::Header);
        let source = render_main(&sess);
        assert!(source.contains("#include <math.h>\n"));
        assert!(source.contains("\ntypedef int myint;\n"));
        assert!(source.contains("\n#define LIMIT 16\n"));
        assert!(!source.contains("#include \"typedef"));
    }

    #[test]
    fn java_source_defines_printf_overloads() {
        let sess = Session::new(Language::Java);
        let source = render_main(&sess);
        assert!(source.contains("public class Main {"));
        assert!(source.contains("public static void pf(String fmt, Object o1) {"));
        assert!(source.contains(
            "public static void pf(String fmt, Object o1, Object o2, Object o3, Object o4, Object o5) {"
        ));
    }

    #[test]
    fn java_imports_render_outside_the_class() {
        let mut sess = Session::new(Language::Java);
        sess.add("import java.util.List;", Location::Auto);
        let source = render_main(&sess);
        let import_at = source.find("import java.util.List;").unwrap();
        let class_at = source.find("public class Main {").unwrap();
        assert!(import_at < class_at);
    }

    #[test]
    fn objc_wraps_main_in_autorelease_pool() {
        let mut sess = Session::new(Language::ObjectiveC);
        sess.add("p(\"hi\");", Location::Auto);
        let source = render_main(&sess);
        assert!(source.starts_with("#import <Foundation/Foundation.h>"));
        assert!(source.contains("NSAutoreleasePool * pool"));
        assert!(source.contains("[pool drain];"));
    }

    #[test]
    fn csharp_uses_top_class() {
        let sess = Session::new(Language::CSharp);
        let source = render_main(&sess);
        assert!(source.contains("public class Top {"));
        assert!(source.contains("public static void Main(string[] args) {"));
    }
}
