//! Threaded token stream.
//!
//! [`TokenStream`] runs a [`Lexer`] on its own thread and hands tokens to the consumer through a
//! bounded channel. The producer blocks once the channel is full, so at most `capacity` tokens are
//! ever buffered ahead of the parser.
//!
//! ## Notes
//! - Token order is identical to the inline lexer.
//! - Dropping the stream early makes the producer's next send fail, which ends the thread.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use super::{Lexer, Token};
use crate::ast::Comment;

/// Lexer running on a dedicated thread behind a bounded channel.
pub struct TokenStream {
    receiver: Option<Receiver<Token>>,
    producer: Option<JoinHandle<Vec<Comment>>>,
}

impl TokenStream {
    /// Channel capacity used by [`TokenStream::spawn`].
    pub const DEFAULT_CAPACITY: usize = 2;

    /// Start lexing `source` on a new thread with the default capacity.
    ///
    /// ## Errors
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn(source: &str) -> io::Result<Self> {
        Self::with_capacity(source, Self::DEFAULT_CAPACITY)
    }

    /// Start lexing `source` on a new thread, buffering at most `capacity` tokens (minimum 1).
    ///
    /// ## Errors
    /// Returns the OS error if the thread cannot be spawned.
    pub fn with_capacity(source: &str, capacity: usize) -> io::Result<Self> {
        let source = source.to_owned();
        let (sender, receiver) = mpsc::sync_channel(capacity.max(1));

        let producer = thread::Builder::new()
            .name("solbot-lexer".to_string())
            .spawn(move || {
                let mut lexer = Lexer::new(&source);
                for token in lexer.by_ref() {
                    if sender.send(token).is_err() {
                        tracing::debug!("token consumer went away; stopping lexer");
                        break;
                    }
                }
                lexer.into_comments()
            })?;

        Ok(Self {
            receiver: Some(receiver),
            producer: Some(producer),
        })
    }

    /// Block until the next token is available.
    ///
    /// Returns `None` once the terminal token has been delivered and the producer has finished.
    pub fn next_token(&mut self) -> Option<Token> {
        self.receiver.as_ref()?.recv().ok()
    }

    /// Stop consuming, wait for the producer and return the comments it collected.
    pub fn finish(mut self) -> Vec<Comment> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Vec<Comment> {
        drop(self.receiver.take());
        match self.producer.take().map(JoinHandle::join) {
            Some(Ok(comments)) => comments,
            Some(Err(_)) => {
                tracing::error!("lexer thread panicked");
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.shutdown();
    }
}
