//! Class and member directives
//!
//!     $class NAME[ : PARENT]      open a view class, optionally chained to a parent view
//!     $member TYPE NAME           compose a TYPE view into the open class as `NAME`
//!     $endclass                   close the open class
//!
//!     At most one class is open at a time. Class names are plain identifiers; parent and member
//!     types may be paths (`super::Layout`) since they are only copied into the generated code.
//!
//!     The functions here receive the text after the `$` and the keyword.

use once_cell::sync::Lazy;
use regex::Regex;

use super::line::{ClassDescriptor, MemberDescriptor};
use super::state::ParseState;
use crate::error::SyntaxError;

const BLANKS: [char; 2] = [' ', '\t'];

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").expect("identifier pattern is valid"));

static TYPE_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:::)?[A-Za-z_][A-Za-z0-9_]*(?:::[A-Za-z_][A-Za-z0-9_]*)*")
        .expect("type path pattern is valid")
});

/// Strip a directive keyword. The keyword must be followed by a blank or the end of the line.
pub fn strip_keyword<'a>(rest: &'a str, keyword: &str) -> Option<&'a str> {
    rest.strip_prefix(keyword)
        .filter(|args| args.is_empty() || args.starts_with(BLANKS))
}

pub fn parse_class(args: &str, state: &ParseState) -> Result<ClassDescriptor, SyntaxError> {
    if let Some(scope) = &state.class_scope {
        return Err(SyntaxError::scope(format!(
            "Cannot open new class here, did you forget to call $endclass for {}?",
            scope.class.name
        )));
    }

    let args = args.trim_start_matches(BLANKS);
    let name = leading(&IDENTIFIER, args)
        .ok_or_else(|| SyntaxError::directive("Could not find class name"))?;

    let rest = args[name.len()..].trim_start_matches(BLANKS);
    if rest.is_empty() {
        return Ok(ClassDescriptor {
            name: name.to_string(),
            parent: None,
        });
    }

    let parent_part = rest
        .strip_prefix(':')
        .ok_or_else(|| {
            SyntaxError::directive(
                "Unexpected character after class name, did you forget a ':'?",
            )
        })?
        .trim_start_matches(BLANKS);
    let parent = leading(&TYPE_PATH, parent_part)
        .ok_or_else(|| SyntaxError::directive("Could not find parent class name"))?;
    if !is_blank(&parent_part[parent.len()..]) {
        return Err(SyntaxError::directive(
            "Unexpected trailing characters after parent class name",
        ));
    }

    Ok(ClassDescriptor {
        name: name.to_string(),
        parent: Some(parent.to_string()),
    })
}

pub fn parse_member(args: &str, state: &ParseState) -> Result<MemberDescriptor, SyntaxError> {
    let scope = state.class_scope.as_ref().ok_or_else(|| {
        SyntaxError::scope("Cannot add a member here, did you forget to call $class?")
    })?;
    if state.curly_level != scope.curly_level {
        return Err(SyntaxError::scope(
            "Cannot add a member inside a nested scope, members belong to the class body",
        ));
    }

    let args = args.trim_start_matches(BLANKS);
    let class_name = leading(&TYPE_PATH, args)
        .ok_or_else(|| SyntaxError::directive("Could not find member class name"))?;

    let after_type = &args[class_name.len()..];
    if is_blank(after_type) {
        return Err(SyntaxError::directive("Could not find member name"));
    }
    if !after_type.starts_with(BLANKS) {
        return Err(SyntaxError::directive(
            "Unexpected character after member class name",
        ));
    }

    let after_type = after_type.trim_start_matches(BLANKS);
    let name = leading(&IDENTIFIER, after_type)
        .ok_or_else(|| SyntaxError::directive("Could not find member name"))?;
    if !is_blank(&after_type[name.len()..]) {
        return Err(SyntaxError::directive(
            "unexpected characters after member declaration",
        ));
    }

    Ok(MemberDescriptor {
        class_name: class_name.to_string(),
        name: name.to_string(),
    })
}

pub fn parse_endclass(args: &str, state: &ParseState) -> Result<(), SyntaxError> {
    let scope = state
        .class_scope
        .as_ref()
        .ok_or_else(|| SyntaxError::scope("No class to end here"))?;
    if state.curly_level != scope.curly_level {
        return Err(SyntaxError::scope(format!(
            "Cannot end class {} inside a nested scope, check the closing curly braces",
            scope.class.name
        )));
    }
    if !is_blank(args) {
        return Err(SyntaxError::directive(
            "Unexpected trailing characters after $endclass",
        ));
    }
    Ok(())
}

fn leading<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern.find(text).map(|found| found.as_str())
}

fn is_blank(text: &str) -> bool {
    text.trim_matches(BLANKS).is_empty()
}
