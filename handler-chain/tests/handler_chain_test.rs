//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: handler before/after order, handler before stopping the chain, Stop ending the handle
//! phase and being passed to after, Continue falling through, and errors propagating.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use docbot_core::{
    Chat, DbotError, Handler, HandlerResponse, IncomingDocument, Message, User,
};
use handler_chain::HandlerChain;

fn create_document_message(file_name: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: String::new(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "document".to_string(),
        document: Some(IncomingDocument {
            file_id: "file-1".to_string(),
            file_name: Some(file_name.to_string()),
            mime_type: None,
            file_size: 10,
        }),
        created_at: Utc::now(),
    }
}

/// **Test: Handler before and after run once each; handle runs once.**
#[tokio::test]
async fn test_handler_chain_with_handler() {
    let before_count = Arc::new(AtomicUsize::new(0));
    let after_count = Arc::new(AtomicUsize::new(0));
    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(TestBeforeAfterHandler {
            before_count: before_count.clone(),
            after_count: after_count.clone(),
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: handle_count.clone(),
            response: HandlerResponse::Continue,
        }));

    let result = chain
        .handle(&create_document_message("report.pdf"))
        .await
        .unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(before_count.load(Ordering::SeqCst), 1);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(after_count.load(Ordering::SeqCst), 1);
}

/// **Test: Handler before returns false stops the chain; handle is not run.**
#[tokio::test]
async fn test_handler_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> docbot_core::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CountingHandler {
            handle_count: handle_count.clone(),
            response: HandlerResponse::Continue,
        }));

    let result = chain
        .handle(&create_document_message("report.pdf"))
        .await
        .unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Stop ends the handle phase; later handlers are skipped; after sees Stop.**
#[tokio::test]
async fn test_stop_skips_later_handlers_and_reaches_after() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(None));

    struct CaptureResponseHandler {
        seen: Arc<Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureResponseHandler {
        async fn after(
            &self,
            _message: &Message,
            response: &HandlerResponse,
        ) -> docbot_core::Result<()> {
            *self.seen.lock().unwrap() = Some(*response);
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponseHandler { seen: seen.clone() }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: first.clone(),
            response: HandlerResponse::Stop,
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: second.clone(),
            response: HandlerResponse::Continue,
        }));

    let result = chain
        .handle(&create_document_message("letter.docx"))
        .await
        .unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
    assert_eq!(*seen.lock().unwrap(), Some(HandlerResponse::Stop));
}

/// **Test: Continue falls through to the next handler, whose Stop becomes the result.**
#[tokio::test]
async fn test_continue_falls_through() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingHandler {
            handle_count: first.clone(),
            response: HandlerResponse::Continue,
        }))
        .add_handler(Arc::new(CountingHandler {
            handle_count: second.clone(),
            response: HandlerResponse::Stop,
        }));

    let result = chain
        .handle(&create_document_message("report.pdf"))
        .await
        .unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

/// **Test: An error from handle propagates out of the chain.**
#[tokio::test]
async fn test_handle_error_propagates() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> docbot_core::Result<HandlerResponse> {
            Err(DbotError::Bot("network down".to_string()))
        }
    }

    let chain = HandlerChain::new().add_handler(Arc::new(FailingHandler));

    let err = chain
        .handle(&create_document_message("report.pdf"))
        .await
        .unwrap_err();

    assert!(matches!(err, DbotError::Bot(_)));
}

/// **Test: Multiple handlers run before in order (first, second), after in reverse (second, first).**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));

    struct OrderHandler {
        name: String,
        order: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> docbot_core::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(
            &self,
            _message: &Message,
            _response: &HandlerResponse,
        ) -> docbot_core::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first".to_string(),
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second".to_string(),
            order: order.clone(),
        }));

    assert_eq!(chain.len(), 2);
    chain
        .handle(&create_document_message("report.pdf"))
        .await
        .unwrap();

    let executed = order.lock().unwrap();
    assert_eq!(
        *executed,
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

// --- Helpers used by tests ---

struct TestBeforeAfterHandler {
    before_count: Arc<AtomicUsize>,
    after_count: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl Handler for TestBeforeAfterHandler {
    async fn before(&self, _message: &Message) -> docbot_core::Result<bool> {
        self.before_count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> docbot_core::Result<()> {
        self.after_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct CountingHandler {
    handle_count: Arc<AtomicUsize>,
    response: HandlerResponse,
}

#[async_trait::async_trait]
impl Handler for CountingHandler {
    async fn handle(&self, _message: &Message) -> docbot_core::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response)
    }
}
