//! User-facing feedback messages

/// Receives toast-style notifications
pub trait Notifier {
    fn failure(&mut self, message: &str);
    fn info(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// First page came back empty
    NoResults,
    /// A later page came back empty, or every hit is loaded
    EndOfResults,
    /// Submitted text was blank
    EmptyQuery,
    /// Request failed; the same page can be retried
    FetchFailed,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::NoResults => {
                "Sorry, there are no images matching your search query. Please try again."
            }
            Feedback::EndOfResults => "We're sorry, but you've reached the end of search results.",
            Feedback::EmptyQuery => "Please enter a search query.",
            Feedback::FetchFailed => {
                "Something went wrong while loading images. Please try again."
            }
        }
    }

    pub fn is_failure(self) -> bool {
        !matches!(self, Feedback::EndOfResults)
    }

    pub fn deliver<N: Notifier + ?Sized>(self, notifier: &mut N) {
        if self.is_failure() {
            notifier.failure(self.message());
        } else {
            notifier.info(self.message());
        }
    }
}
