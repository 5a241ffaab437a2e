//! Alert banners written into the result container

/// Bootstrap alert flavour of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Danger,
}

impl BannerKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
        }
    }
}

/// A banner as shown in the result container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub const SUCCESS_MESSAGE: &'static str = "Success! Profile updated.";

    pub fn success() -> Self {
        Self {
            kind: BannerKind::Success,
            message: Self::SUCCESS_MESSAGE.to_string(),
        }
    }

    /// Failure banner carrying the raw response body
    pub fn failure(body: &str) -> Self {
        Self {
            kind: BannerKind::Danger,
            message: format!("Failure! {body}"),
        }
    }

    /// Markup written into the result container
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"alert {}\" role=\"alert\">\n  {}\n</div>",
            self.kind.class(),
            self.message
        )
    }

    /// Recover a banner from container markup produced by [`Banner::to_html`]
    pub fn parse(html: &str) -> Option<Self> {
        let open_end = html.find('>')?;
        let (open, rest) = html.split_at(open_end + 1);
        let kind = if open.contains(BannerKind::Success.class()) {
            BannerKind::Success
        } else if open.contains(BannerKind::Danger.class()) {
            BannerKind::Danger
        } else {
            return None;
        };
        let inner = rest.strip_suffix("</div>").unwrap_or(rest);
        Some(Self {
            kind,
            message: inner.trim().to_string(),
        })
    }
}
