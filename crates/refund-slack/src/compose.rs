//! Builds the refund notification posted to a subgroup's channel.
//!
//! All applicant-supplied text goes through [`sanitize`] before it lands in a
//! `mrkdwn` field. The submission time is passed in, never read here.

use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};
use refund_core::{sanitize, ValidatedRequest};

use crate::blocks::{Block, SlackMessage, Text};

/// Organisers read the timestamp in Korea Standard Time (no DST).
const SEOUL_UTC_OFFSET_SECS: i32 = 9 * 3600;

const HEADER: &str = "🔔 AWSKRUG 환불 신청";
const FALLBACK_TEXT: &str = "새로운 환불 신청이 접수되었습니다.";
const FOOTER: &str = "담당자는 신청자에게 연락하여 환불을 진행해주세요.";

const LABEL_GROUP: &str = "소모임";
const LABEL_NAME: &str = "신청자 이름";
const LABEL_BANK: &str = "은행이름";
const LABEL_ACCOUNT: &str = "계좌번호";
const LABEL_SUBMITTED_AT: &str = "신청일시";
const LABEL_MEMO: &str = "메모";

/// Compose the `chat.postMessage` body for a validated request.
pub fn compose(req: &ValidatedRequest, submitted_at: DateTime<Utc>) -> SlackMessage {
    let mut blocks = vec![
        Block::header(HEADER),
        Block::fields(vec![
            labelled(LABEL_GROUP, &sanitize(&req.group.name)),
            labelled(LABEL_NAME, &sanitize(&req.name)),
            labelled(LABEL_BANK, &sanitize(&req.bank_name)),
            labelled(LABEL_ACCOUNT, &sanitize(&req.account_number)),
            labelled(LABEL_SUBMITTED_AT, &format_seoul_time(submitted_at)),
        ]),
    ];

    if let Some(memo) = req.memo.as_deref().filter(|m| !m.trim().is_empty()) {
        blocks.push(Block::section(labelled(LABEL_MEMO, &sanitize(memo))));
    }

    blocks.push(Block::Divider);
    blocks.push(Block::Context {
        elements: vec![Text::mrkdwn(footer(req.group.contact_id.as_deref()))],
    });

    SlackMessage {
        channel: req.group.channel_id.clone(),
        text: FALLBACK_TEXT.to_string(),
        blocks,
    }
}

/// `YYYY. M. D. 오전|오후 h:mm:ss` in Seoul time, the way Korean browsers
/// print a locale timestamp.
pub fn format_seoul_time(at: DateTime<Utc>) -> String {
    let local = at.with_timezone(&seoul_offset());
    let (is_pm, hour) = local.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };
    format!(
        "{}. {}. {}. {} {}:{:02}:{:02}",
        local.year(),
        local.month(),
        local.day(),
        meridiem,
        hour,
        local.minute(),
        local.second()
    )
}

fn seoul_offset() -> FixedOffset {
    FixedOffset::east_opt(SEOUL_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

fn labelled(label: &str, value: &str) -> Text {
    Text::mrkdwn(format!("*{label}:*\n{value}"))
}

fn footer(contact: Option<&str>) -> String {
    match contact.map(str::trim).filter(|c| !c.is_empty()) {
        Some(handle) => format!("{FOOTER} (담당자: @{})", sanitize(handle)),
        None => FOOTER.to_string(),
    }
}
