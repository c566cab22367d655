//! # Submission policy — validation and the post throttle
//!
//! The checks a quote must pass before the client issues an insert, in
//! order: registered poster name, non-empty body, body length, post
//! interval. The first failing check wins and maps to exactly one
//! user-facing message. Everything here is pure so the pipeline is
//! testable without a browser or a store.

/// Maximum quote body length in characters, counted after trimming.
pub const MAX_QUOTE_LEN: usize = 200;

/// Minimum interval between successful posts from one device.
pub const POST_INTERVAL_MS: u64 = 30_000;

/// Poster name recorded when the registered name trims to nothing.
pub const ANONYMOUS_POSTER: &str = "匿名";

/// Blocking prompt shown when submitting without a registered poster name.
pub const NAME_REQUIRED_PROMPT: &str = "まずは投稿者名を登録してください";

/// Why a submission was stopped before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlock {
    /// Body is empty after trimming.
    EmptyBody,
    /// Body exceeds [`MAX_QUOTE_LEN`] after trimming.
    TooLong,
    /// Posted again within [`POST_INTERVAL_MS`]; wait the given whole seconds.
    RateLimited { wait_secs: u64 },
}

impl SubmitBlock {
    /// The user-facing toast message for this rejection.
    pub fn message(&self) -> String {
        match self {
            SubmitBlock::EmptyBody => "名言本文は必須です".to_string(),
            SubmitBlock::TooLong => {
                format!("名言は{MAX_QUOTE_LEN}文字以内で入力してください")
            }
            SubmitBlock::RateLimited { wait_secs } => {
                format!("あと{wait_secs}秒待ってください")
            }
        }
    }
}

/// Validate the quote body. Returns the trimmed text on success.
pub fn check_body(text: &str) -> Result<String, SubmitBlock> {
    let cleaned = text.trim();
    if cleaned.is_empty() {
        return Err(SubmitBlock::EmptyBody);
    }
    if cleaned.chars().count() > MAX_QUOTE_LEN {
        return Err(SubmitBlock::TooLong);
    }
    Ok(cleaned.to_string())
}

/// Enforce the device-local post interval.
///
/// A deterrent against rapid re-posting, not a security boundary: the
/// marker lives on the device and anyone can clear it.
pub fn check_post_interval(last_post_at: Option<u64>, now_ms: u64) -> Result<(), SubmitBlock> {
    let Some(last) = last_post_at else {
        return Ok(());
    };
    let elapsed = now_ms.saturating_sub(last);
    if elapsed < POST_INTERVAL_MS {
        let wait_secs = (POST_INTERVAL_MS - elapsed).div_ceil(1000);
        return Err(SubmitBlock::RateLimited { wait_secs });
    }
    Ok(())
}

/// The poster name recorded on a new quote: the registered name, trimmed,
/// or [`ANONYMOUS_POSTER`] when that leaves nothing.
pub fn effective_poster_name(registered: &str) -> String {
    let cleaned = registered.trim();
    if cleaned.is_empty() {
        ANONYMOUS_POSTER.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_rejected() {
        assert_eq!(check_body(""), Err(SubmitBlock::EmptyBody));
        assert_eq!(check_body("   \n\t "), Err(SubmitBlock::EmptyBody));
    }

    #[test]
    fn test_body_is_trimmed() {
        assert_eq!(check_body("  生きろ  ").as_deref(), Ok("生きろ"));
    }

    #[test]
    fn test_body_length_boundary() {
        // Multibyte characters count once each.
        let exactly_200: String = "あ".repeat(MAX_QUOTE_LEN);
        assert_eq!(check_body(&exactly_200).as_deref(), Ok(exactly_200.as_str()));

        let over: String = "あ".repeat(MAX_QUOTE_LEN + 1);
        assert_eq!(check_body(&over), Err(SubmitBlock::TooLong));

        // Surrounding whitespace does not count toward the limit.
        let padded = format!("  {exactly_200}  ");
        assert!(check_body(&padded).is_ok());
    }

    #[test]
    fn test_too_long_message_names_the_limit() {
        assert!(SubmitBlock::TooLong.message().contains("200"));
    }

    #[test]
    fn test_no_marker_means_no_throttle() {
        assert_eq!(check_post_interval(None, 1_000), Ok(()));
    }

    #[test]
    fn test_throttle_wait_rounds_up() {
        // 5s elapsed of a 30s interval leaves 25s.
        assert_eq!(
            check_post_interval(Some(10_000), 15_000),
            Err(SubmitBlock::RateLimited { wait_secs: 25 })
        );

        // 1ms of remaining wait still reports a full second.
        assert_eq!(
            check_post_interval(Some(0), POST_INTERVAL_MS - 1),
            Err(SubmitBlock::RateLimited { wait_secs: 1 })
        );
    }

    #[test]
    fn test_throttle_expires_at_exactly_the_interval() {
        assert_eq!(check_post_interval(Some(0), POST_INTERVAL_MS), Ok(()));
        assert_eq!(check_post_interval(Some(0), POST_INTERVAL_MS + 1), Ok(()));
    }

    #[test]
    fn test_throttle_immediately_after_posting() {
        assert_eq!(
            check_post_interval(Some(5_000), 5_000),
            Err(SubmitBlock::RateLimited { wait_secs: 30 })
        );
    }

    #[test]
    fn test_wait_message_includes_seconds() {
        let block = SubmitBlock::RateLimited { wait_secs: 25 };
        assert_eq!(block.message(), "あと25秒待ってください");
    }

    #[test]
    fn test_effective_poster_name_falls_back() {
        assert_eq!(effective_poster_name("  詩人  "), "詩人");
        assert_eq!(effective_poster_name("   "), ANONYMOUS_POSTER);
        assert_eq!(effective_poster_name(""), ANONYMOUS_POSTER);
    }
}
