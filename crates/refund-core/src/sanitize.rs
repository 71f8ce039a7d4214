/// Escape user text for embedding in a Slack `mrkdwn` field.
///
/// `&`, `<` and `>` become HTML entities (Slack treats `<...>` as links and
/// mentions). The emphasis markers `* _ ~` and the code marker `` ` `` get a
/// backslash prefix so user input can't restyle the message.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '*' | '_' | '~' | '`' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
