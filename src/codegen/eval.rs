//! 求值后端
//!
//! 以 f64 直接求值，替代外部 JIT 执行引擎；同时是测试中的参考求值器。

use super::CodeEmitter;
use crate::error::AexResult;

/// 解释求值器，值句柄即计算结果本身
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Evaluator
    }
}

impl CodeEmitter for Evaluator {
    type Value = f64;

    fn emit_constant(&mut self, value: f64) -> AexResult<f64> {
        Ok(value)
    }

    fn emit_add(&mut self, lhs: f64, rhs: f64) -> AexResult<f64> {
        Ok(lhs + rhs)
    }

    fn emit_mul(&mut self, lhs: f64, rhs: f64) -> AexResult<f64> {
        Ok(lhs * rhs)
    }
}
