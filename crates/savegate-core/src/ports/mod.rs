//! Ports - 外部依存の抽象化
//!
//! 判定ロジックはシステム時計を直接読まない。
//! 呼び出し側が Clock を選ぶ（本番: SystemClock、テスト: FixedClock）。

pub mod clock;

pub use self::clock::{Clock, FixedClock, SystemClock};
