use super::Error;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// 指数退避重试
///
/// 只重试[`Error::is_retryable`]为true的错误，每次失败后等待时间翻倍（1s, 2s, ...），
/// 次数用完后返回最后一次的错误
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY)
    }
}

impl RetryPolicy {
    /// max_attempts包括第一次请求
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// 第attempt次失败后的等待时间，attempt从1开始
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }

    /// op的参数是当前的尝试次数，从1开始
    ///
    /// 每次调用op都应该重新签名，签名和时间戳绑定，不能复用
    pub async fn execute<T, F, Fut>(&self, mut op: F) -> Result<T, Error>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        for attempt in 1..=self.max_attempts {
            match op(attempt).await {
                Ok(v) => return Ok(v),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retryable failure, backing off"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
        // 最后一次的错误在循环里已经返回，只有max_attempts为0时才会走到这里
        Err(Error::RequestFailed)
    }
}
