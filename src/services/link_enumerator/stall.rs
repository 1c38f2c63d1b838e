//! 渐进加载的停滞检测状态机
//!
//! ```text
//! Collecting ──count_grew──────────────▶ Collecting
//! Collecting ──无增长──────────────────▶ Stalled(1)
//! Stalled(n) ──无增长──────────────────▶ Stalled(n+1)
//! Stalled(n) ──count_grew──────────────▶ Collecting
//! 任意状态   ──reached_expected────────▶ Complete
//! Stalled(n) ──stall_limit_reached─────▶ Aborted   (已收集的链接仍然有效)
//! ```

/// 采样状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectState {
    /// 数量仍在增长
    Collecting,
    /// 连续 n 次采样没有新链接
    Stalled(usize),
    /// 已达到预期总数
    Complete,
    /// 停滞次数达到上限，带着部分结果结束
    Aborted,
}

impl CollectState {
    pub fn is_terminal(self) -> bool {
        matches!(self, CollectState::Complete | CollectState::Aborted)
    }
}

/// 数量比上次采样多
pub fn count_grew(count: usize, last_count: usize) -> bool {
    count > last_count
}

/// 数量达到预期总数
pub fn reached_expected(count: usize, expected: usize) -> bool {
    count >= expected
}

/// 停滞次数达到上限
pub fn stall_limit_reached(stalls: usize, max_stalls: usize) -> bool {
    stalls >= max_stalls
}

/// 一次枚举调用独占的停滞跟踪器，结束后丢弃
#[derive(Debug, Clone)]
pub struct StallTracker {
    expected: usize,
    max_stalls: usize,
    last_count: usize,
    state: CollectState,
}

impl StallTracker {
    /// `max_stalls` 至少为 1
    pub fn new(expected: usize, max_stalls: usize) -> Self {
        let state = if reached_expected(0, expected) {
            CollectState::Complete
        } else {
            CollectState::Collecting
        };
        Self {
            expected,
            max_stalls: max_stalls.max(1),
            last_count: 0,
            state,
        }
    }

    /// 喂入一次采样结果，返回新状态；终止后再喂入不会改变状态
    pub fn observe(&mut self, count: usize) -> CollectState {
        if self.state.is_terminal() {
            return self.state;
        }

        let next = if reached_expected(count, self.expected) {
            CollectState::Complete
        } else if count_grew(count, self.last_count) {
            CollectState::Collecting
        } else {
            let stalls = self.stalls() + 1;
            if stall_limit_reached(stalls, self.max_stalls) {
                CollectState::Aborted
            } else {
                CollectState::Stalled(stalls)
            }
        };

        self.last_count = count;
        self.state = next;
        next
    }

    pub fn state(&self) -> CollectState {
        self.state
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn last_count(&self) -> usize {
        self.last_count
    }

    /// 当前连续停滞次数，不会超过 `max_stalls`
    pub fn stalls(&self) -> usize {
        match self.state {
            CollectState::Stalled(n) => n,
            CollectState::Aborted => self.max_stalls,
            CollectState::Collecting | CollectState::Complete => 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
