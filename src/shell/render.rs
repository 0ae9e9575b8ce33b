use std::fmt;
use std::fmt::{Display, Formatter};
use std::fmt::Write;
use crate::items::dto::ItemDto;
use crate::shell::form::ItemForm;

pub const AVAILABLE_HEADER: &str = "Available Books:";
pub const NO_AUTHOR_MATCH: &str = "No books found by this author.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    InputError,
    Error,
}

impl Display for NoticeKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NoticeKind::Success => write!(f, "Success"),
            NoticeKind::InputError => write!(f, "Input Error"),
            NoticeKind::Error => write!(f, "Error"),
        }
    }
}

// Notice is the message box shown above the form after an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: &str) -> Self {
        Self { kind: NoticeKind::Success, text: text.to_string() }
    }

    pub fn input_error(text: &str) -> Self {
        Self { kind: NoticeKind::InputError, text: text.to_string() }
    }

    pub fn error(text: &str) -> Self {
        Self { kind: NoticeKind::Error, text: text.to_string() }
    }
}

pub fn available_listing(items: &[ItemDto]) -> String {
    let mut out = format!("{}\n\n", AVAILABLE_HEADER);
    for item in items {
        let _ = writeln!(out, "{}", item);
    }
    out
}

pub fn author_listing(author: &str, items: &[ItemDto]) -> String {
    let mut out = format!("Books by {}:\n\n", author);
    if items.is_empty() {
        out.push_str(NO_AUTHOR_MATCH);
    }
    for item in items {
        let _ = writeln!(out, "{}", item);
    }
    out
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const STYLE: &str = "body{font-family:sans-serif;max-width:650px;margin:15px auto}\
fieldset{margin-bottom:10px}label{display:inline-block;width:160px}\
input[type=text]{width:300px;margin:4px 0}\
button{width:140px;margin:4px}button.query{width:200px}\
.notice{padding:8px;margin-bottom:10px;border:1px solid}\
.success{border-color:#2a2;background:#efe}.error{border-color:#c22;background:#fee}\
textarea{width:100%;height:12em}";

const TOGGLE_SCRIPT: &str = "function toggleEbook(box){\
var size=document.getElementById('download_size');\
size.disabled=!box.checked;if(!box.checked){size.value='';}}";

fn text_field(out: &mut String, name: &str, label: &str, value: &str, disabled: bool) {
    let _ = writeln!(out,
                     "<div><label for=\"{name}\">{label}</label><input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{disabled}></div>",
                     name = name, label = label, value = escape_html(value),
                     disabled = if disabled { " disabled" } else { "" });
}

pub fn render_page(library_name: &str, form: &ItemForm, notice: Option<&Notice>) -> String {
    let title = escape_html(library_name);
    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title>", title);
    let _ = writeln!(out, "<style>{}</style><script>{}</script></head><body>", STYLE, TOGGLE_SCRIPT);
    let _ = writeln!(out, "<h1>{}</h1>", title);
    if let Some(notice) = notice {
        let class = if notice.kind == NoticeKind::Success { "success" } else { "error" };
        let _ = writeln!(out, "<div class=\"notice {}\" role=\"alert\"><strong>{}</strong>: {}</div>",
                         class, notice.kind, escape_html(notice.text.as_str()));
    }
    out.push_str("<form method=\"post\" action=\"/\">\n<fieldset><legend>Book Information</legend>\n");
    text_field(&mut out, "title", "Title:", form.title.as_str(), false);
    text_field(&mut out, "author", "Author:", form.author.as_str(), false);
    text_field(&mut out, "isbn", "ISBN:", form.isbn.as_str(), false);
    let _ = writeln!(out,
                     "<div><label></label><input type=\"checkbox\" id=\"ebook\" name=\"ebook\" onchange=\"toggleEbook(this)\"{}><label for=\"ebook\">Is eBook?</label></div>",
                     if form.is_ebook() { " checked" } else { "" });
    text_field(&mut out, "download_size", "Download Size (MB):", form.download_size.as_str(), !form.is_ebook());
    out.push_str("</fieldset>\n<div>\n");
    for (action, label, class) in [
        ("add", "Add Book", ""),
        ("remove", "Remove Book", ""),
        ("lend", "Lend Book", ""),
        ("return", "Return Book", ""),
        ("available", "Show Available Books", "query"),
        ("author", "Show Books by Author", "query"),
    ] {
        let _ = writeln!(out, "<button type=\"submit\" name=\"action\" value=\"{}\" class=\"{}\">{}</button>",
                         action, class, label);
    }
    out.push_str("</div>\n<fieldset><legend>Output</legend>\n");
    let _ = writeln!(out, "<textarea name=\"output\" readonly>{}</textarea>", escape_html(form.output.as_str()));
    out.push_str("</fieldset>\n</form>\n</body></html>\n");
    out
}
