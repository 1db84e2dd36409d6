//! Chat thread state.

use std::rc::Rc;

use barkhood_ai::{ChatTurn, Sender};
use yew::Reducible;

/// What to send to the assistant for one accepted message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Trimmed user message.
    pub message: String,
    /// Turns visible before the message was added.
    pub history: Vec<ChatTurn>,
}

/// Ordered conversation shown in the assistant view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatThread {
    turns: Vec<ChatTurn>,
    pending: bool,
    next_id: u64,
}

impl ChatThread {
    /// Start a thread with the assistant's greeting.
    #[must_use]
    pub fn new(greeting: &str) -> Self {
        let mut thread = Self {
            turns: Vec::new(),
            pending: false,
            next_id: 1,
        };
        thread.push(greeting.to_string(), Sender::Assistant);
        thread
    }

    /// Turns in display order.
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Whether a reply is outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the send button should be enabled for `input`.
    #[must_use]
    pub fn can_send(&self, input: &str) -> bool {
        !self.pending && !input.trim().is_empty()
    }

    /// What [`Self::submit`] would send for `input`, without sending it.
    #[must_use]
    pub fn submission(&self, input: &str) -> Option<Submission> {
        self.can_send(input).then(|| Submission {
            message: input.trim().to_string(),
            history: self.turns.clone(),
        })
    }

    /// Accept `input` as the next user turn.
    ///
    /// Returns `None` without changing anything when the input is blank or a
    /// reply is still pending.
    pub fn submit(&mut self, input: &str) -> Option<Submission> {
        let submission = self.submission(input)?;
        self.push(submission.message.clone(), Sender::User);
        self.pending = true;
        Some(submission)
    }

    /// Append the assistant's reply and accept input again.
    pub fn receive(&mut self, reply: String) {
        self.push(reply, Sender::Assistant);
        self.pending = false;
    }

    /// Swap the greeting's language while the user has not written yet.
    pub fn relocalize(&mut self, greeting: &str) {
        if let [only] = self.turns.as_mut_slice() {
            if only.sender == Sender::Assistant {
                greeting.clone_into(&mut only.text);
            }
        }
    }

    fn push(&mut self, text: String, sender: Sender) {
        self.turns.push(ChatTurn {
            id: self.next_id,
            text,
            sender,
        });
        self.next_id += 1;
    }
}

/// Transitions of a [`ChatThread`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    /// The user sent a message.
    Submit(String),
    /// The assistant replied.
    Receive(String),
    /// The language changed.
    Relocalize(&'static str),
}

impl Reducible for ChatThread {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Submit(input) => {
                if next.submit(&input).is_none() {
                    return self;
                }
            }
            ChatAction::Receive(reply) => next.receive(reply),
            ChatAction::Relocalize(greeting) => next.relocalize(greeting),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_opens_with_the_greeting() {
        let thread = ChatThread::new("Hi!");
        assert_eq!(thread.turns().len(), 1);
        assert_eq!(thread.turns()[0].sender, Sender::Assistant);
        assert_eq!(thread.turns()[0].text, "Hi!");
        assert!(!thread.is_pending());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut thread = ChatThread::new("Hi!");
        assert!(thread.submit("   ").is_none());
        assert_eq!(thread.turns().len(), 1);
        assert!(!thread.can_send(""));
    }

    #[test]
    fn submit_appends_and_blocks_until_reply() {
        let mut thread = ChatThread::new("Hi!");
        let submission = thread.submit("  what should Rex eat? ").unwrap();
        assert_eq!(submission.message, "what should Rex eat?");
        assert_eq!(submission.history.len(), 1);
        assert!(thread.is_pending());
        assert!(thread.submit("another").is_none());
        assert_eq!(thread.turns().len(), 2);

        thread.receive("Kibble.".to_string());
        assert!(!thread.is_pending());
        let senders: Vec<_> = thread.turns().iter().map(|turn| turn.sender).collect();
        assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
    }

    #[test]
    fn submission_preview_leaves_the_thread_alone() {
        let thread = ChatThread::new("Hi!");
        let preview = thread.submission(" sit? ").unwrap();
        assert_eq!(preview.message, "sit?");
        assert_eq!(thread.turns().len(), 1);
        assert!(!thread.is_pending());
    }

    #[test]
    fn turn_ids_are_unique_and_increasing() {
        let mut thread = ChatThread::new("Hi!");
        for round in 0..3 {
            thread.submit(&format!("question {round}"));
            thread.receive(format!("answer {round}"));
        }
        let ids: Vec<_> = thread.turns().iter().map(|turn| turn.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn greeting_follows_language_until_the_user_writes() {
        let mut thread = ChatThread::new("שלום!");
        thread.relocalize("Hello!");
        assert_eq!(thread.turns()[0].text, "Hello!");

        thread.submit("hi");
        thread.relocalize("Bonjour!");
        assert_eq!(thread.turns()[0].text, "Hello!");
    }

    #[test]
    fn reducer_ignores_rejected_submissions() {
        let thread = Rc::new(ChatThread::new("Hi!"));
        let same = Rc::clone(&thread).reduce(ChatAction::Submit(" ".to_string()));
        assert!(Rc::ptr_eq(&thread, &same));

        let next = thread.reduce(ChatAction::Submit("sit?".to_string()));
        assert!(next.is_pending());
        let next = next.reduce(ChatAction::Receive("Yes.".to_string()));
        assert_eq!(next.turns().len(), 3);
    }
}
