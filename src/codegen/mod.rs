//! 代码生成模块
//!
//! 定义后端接缝 [`CodeEmitter`] 与对 AST 的唯一发射遍历。
//! 核心只依赖抽象的三个发射操作，不感知任何具体指令格式或执行技术。
//!
//! # 模块结构
//!
//! - `ir`: 文本 LLVM IR 后端
//! - `eval`: 求值后端（参考实现，兼作执行引擎替身）

mod eval;
mod ir;

pub use eval::Evaluator;
pub use ir::IrBuilder;

use crate::ast::{AstNode, BinaryOp};
use crate::error::AexResult;

/// 抽象指令发射接口
///
/// 由外部后端实现：常量装载、加法、乘法各返回一个后端自定义的值句柄。
pub trait CodeEmitter {
    /// 后端表示一个已发射值的句柄
    type Value;

    /// 发射常量装载
    fn emit_constant(&mut self, value: f64) -> AexResult<Self::Value>;
    /// 发射加法
    fn emit_add(&mut self, lhs: Self::Value, rhs: Self::Value) -> AexResult<Self::Value>;
    /// 发射乘法
    fn emit_mul(&mut self, lhs: Self::Value, rhs: Self::Value) -> AexResult<Self::Value>;
}

/// 对整棵树做一次发射遍历
///
/// 先左后右，不重排；对有副作用的后端（指令按发射顺序排列）可观测。
pub fn emit<E: CodeEmitter>(node: &AstNode, emitter: &mut E) -> AexResult<E::Value> {
    match node {
        AstNode::Literal(val) => emitter.emit_constant(*val),
        AstNode::Binary { op, left, right } => {
            let lval = emit(left, emitter)?;
            let rval = emit(right, emitter)?;
            match op {
                BinaryOp::Add => emitter.emit_add(lval, rval),
                BinaryOp::Mul => emitter.emit_mul(lval, rval),
            }
        }
    }
}

impl AstNode {
    /// 针对给定后端发射本子树
    pub fn emit<E: CodeEmitter>(&self, emitter: &mut E) -> AexResult<E::Value> {
        emit(self, emitter)
    }
}
