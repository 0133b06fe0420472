//! 按班级划分的咨询锁
//!
//! 同一班级的成绩册初始化串行执行；不再被持有或等待的锁会从表中移除。

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct ClassLocks {
    inner: DashMap<i64, Arc<Mutex<()>>>,
}

pub struct ClassLockGuard<'a> {
    locks: &'a ClassLocks,
    class_id: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl ClassLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, class_id: i64) -> ClassLockGuard<'_> {
        let mutex = self.inner.entry(class_id).or_default().clone();
        let guard = mutex.lock_owned().await;
        ClassLockGuard {
            locks: self,
            class_id,
            guard: Some(guard),
        }
    }

    /// 当前登记的锁数量
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Drop for ClassLockGuard<'_> {
    fn drop(&mut self) {
        // 先释放互斥锁，表中只剩自身引用时移除
        drop(self.guard.take());
        self.locks
            .inner
            .remove_if(&self.class_id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_lock_entry_removed_after_release() {
        let locks = ClassLocks::new();
        {
            let _guard = locks.acquire(1).await;
            assert_eq!(locks.len(), 1);
        }
        assert!(locks.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_class_is_serialized() {
        let locks = Arc::new(ClassLocks::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let max_inside = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let locks = locks.clone();
                let inside = inside.clone();
                let max_inside = max_inside.clone();
                tokio::spawn(async move {
                    let _guard = locks.acquire(7).await;
                    let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                    max_inside.fetch_max(now, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                    inside.fetch_sub(1, Ordering::SeqCst);
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
        assert!(locks.is_empty());
    }
}
