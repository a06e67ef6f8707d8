//! 提交后台任务

use std::sync::Arc;

use stk_booking_core::{Ack, AppointmentPayload, BookingClient, BookingResult};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// 在运行时上执行提交请求，并把结果交还给同步主循环
pub struct SubmissionBackend {
    handle: Handle,
    client: Arc<dyn BookingClient>,
    tx: UnboundedSender<BookingResult<Ack>>,
    rx: UnboundedReceiver<BookingResult<Ack>>,
}

impl SubmissionBackend {
    pub fn new(handle: Handle, client: Arc<dyn BookingClient>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            client,
            tx,
            rx,
        }
    }

    /// 发起提交（不阻塞）
    pub fn spawn_submit(&self, payload: AppointmentPayload) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        self.handle.spawn(async move {
            let outcome = client.submit(&payload).await;
            // 接收端只会在退出时被丢弃，此时结果无人关心
            if tx.send(outcome).is_err() {
                log::debug!("Submission finished after the form was closed");
            }
        });
    }

    /// 取出已结束的提交结果
    pub fn try_recv(&mut self) -> Option<BookingResult<Ack>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
