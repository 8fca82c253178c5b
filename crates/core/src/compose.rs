//! Stateless construction of notification content.
//!
//! Output is channel-agnostic: the email sender renders `body_html` /
//! `body_text`, the push sender uses `title` / `body_text` and carries
//! `action_url` as deep-link data.

use rand::Rng;

/// One motivation catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotivationEntry {
    pub title: &'static str,
    pub body: &'static str,
}

/// Fixed motivation catalog. Selection is uniform random with no memory of
/// previously shown entries; repeats are allowed.
pub const MOTIVATION_CATALOG: [MotivationEntry; 7] = [
    MotivationEntry {
        title: "You're Doing Great! 🎉",
        body: "Learning new words every day brings you one step closer to your goal. Keep it up today!",
    },
    MotivationEntry {
        title: "Small Steps, Big Results! 💪",
        body: "Every flashcard is an investment. The words you learn today are the foundation of fluent speech tomorrow.",
    },
    MotivationEntry {
        title: "Consistency Is Power! ⚡",
        body: "Ten minutes a day beats one long session a week. You're on the right track!",
    },
    MotivationEntry {
        title: "Your Progress Is Amazing! 🌟",
        body: "Every new word you learn is a milestone on your language journey. Keep going!",
    },
    MotivationEntry {
        title: "You're a Champion! 🏆",
        body: "Learning a language takes patience, and you're showing it. Ready to learn new words today?",
    },
    MotivationEntry {
        title: "A Little Better Every Day! 📈",
        body: "The words you learned yesterday stick better today. That progress is wonderful!",
    },
    MotivationEntry {
        title: "You're Getting Closer! 🎯",
        body: "Every flashcard brings you one step closer to your goal. Keep it up today!",
    },
];

/// Composed notification content, independent of delivery channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Email subject line.
    pub subject: String,
    /// Short title (push notification title, email heading).
    pub title: String,
    /// Plain-text body.
    pub body_text: String,
    /// HTML body for the email channel.
    pub body_html: String,
    /// Deep-link to the app, included as the call-to-action.
    pub action_url: String,
}

/// Build the daily reminder content for a user.
///
/// `flashcard_count` is the global flashcard count, not per-user.
pub fn reminder_message(name: &str, flashcard_count: i64, base_url: &str) -> Message {
    let title = "📚 Daily Reminder".to_string();
    let body_text = format!(
        "Hi {name},\n\n\
         It's flashcard time! Ready to learn new words today?\n\n\
         Total flashcards: {flashcard_count}\n\n\
         Open the app: {base_url}\n\n\
         Tip: studying a little every day works far better than one long session a week.\n\n\
         This email was sent automatically. You can turn reminders off in the app settings."
    );
    let body_html = render_html(
        &title,
        name,
        &format!(
            "It's flashcard time! Ready to learn new words today?\
             <p><strong>📊 Total flashcards: {flashcard_count}</strong></p>"
        ),
        base_url,
        "Start Studying",
    );

    Message {
        subject: "📚 Daily Reminder - Time to Study Your Flashcards!".to_string(),
        title,
        body_text,
        body_html,
        action_url: base_url.to_string(),
    }
}

/// Build motivation content for a user from a specific catalog entry.
pub fn motivation_message(name: &str, base_url: &str, entry: &MotivationEntry) -> Message {
    let body_text = format!(
        "{}\n\nHi {name},\n\n\"{}\"\n\n\
         Open the app: {base_url}\n\n\
         This email was sent automatically. You can turn motivation messages off in the app settings.",
        entry.title, entry.body
    );
    let body_html = render_html(
        entry.title,
        name,
        &format!("<em>&quot;{}&quot;</em>", entry.body),
        base_url,
        "Keep Going",
    );

    Message {
        subject: format!("💪 {}", entry.title),
        title: entry.title.to_string(),
        body_text,
        body_html,
        action_url: base_url.to_string(),
    }
}

/// Pick one catalog entry uniformly at random.
pub fn pick_motivation<R: Rng + ?Sized>(rng: &mut R) -> &'static MotivationEntry {
    &MOTIVATION_CATALOG[rng.random_range(0..MOTIVATION_CATALOG.len())]
}

/// Build motivation content with a freshly drawn random entry.
pub fn random_motivation_message(name: &str, base_url: &str) -> Message {
    motivation_message(name, base_url, pick_motivation(&mut rand::rng()))
}

/// Shared HTML shell: heading, greeting, body block, call-to-action button.
fn render_html(title: &str, name: &str, body: &str, base_url: &str, cta: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html><body style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\
         <h1>{title}</h1>\
         <p>Hi <strong>{name}</strong>,</p>\
         <p>{body}</p>\
         <p><a href=\"{base_url}\" style=\"display: inline-block; padding: 12px 24px; \
         background: #667eea; color: white; text-decoration: none; border-radius: 5px;\">{cta}</a></p>\
         <hr>\
         <p style=\"font-size: 12px; color: #999;\">This email was sent automatically. \
         You can change notification settings in the app.</p>\
         </body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn catalog_has_seven_entries() {
        assert_eq!(MOTIVATION_CATALOG.len(), 7);
    }

    #[test]
    fn reminder_includes_name_count_and_link() {
        let msg = reminder_message("Ada", 42, "https://app.example.com");
        assert!(msg.body_text.contains("Ada"));
        assert!(msg.body_text.contains("42"));
        assert!(msg.body_text.contains("https://app.example.com"));
        assert!(msg.body_html.contains("Ada"));
        assert!(msg.body_html.contains("42"));
        assert_eq!(msg.action_url, "https://app.example.com");
    }

    #[test]
    fn motivation_uses_the_given_entry() {
        let entry = &MOTIVATION_CATALOG[2];
        let msg = motivation_message("Ada", "https://app.example.com", entry);
        assert_eq!(msg.subject, format!("💪 {}", entry.title));
        assert!(msg.body_text.contains(entry.body));
        assert!(msg.body_html.contains("Ada"));
    }

    #[test]
    fn composition_is_deterministic_for_fixed_inputs() {
        let a = reminder_message("Ada", 10, "http://localhost:3000");
        let b = reminder_message("Ada", 10, "http://localhost:3000");
        assert_eq!(a, b);
    }

    #[test]
    fn pick_covers_the_whole_catalog() {
        let mut seen = [false; MOTIVATION_CATALOG.len()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let entry = pick_motivation(&mut rng);
            let idx = MOTIVATION_CATALOG
                .iter()
                .position(|e| e == entry)
                .unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "all catalog entries reachable");
    }
}
