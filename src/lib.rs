//! aex：平面算术表达式编译器
//!
//! 将由加法、乘法、括号与浮点字面量构成的表达式字符串解析为 AST，
//! 再通过抽象发射接口降低为后端可执行的指令序列。
//!
//! 流水线：输入 → 空白清理 → 解析 → AST → 发射 → 后端编译执行。
//! 解析与发射均为纯函数式的树操作，单线程同步完成，调用之间无共享状态。

pub mod ast;
pub mod codegen;
pub mod error;
pub mod parser;

pub use ast::{AstNode, BinaryOp};
pub use codegen::{CodeEmitter, Evaluator, IrBuilder, emit};
pub use error::{AexError, AexResult};
pub use parser::{cleanup_input, parse};

/// 编译器门面：清理输入 → 解析 → 发射
///
/// 各 CLI 共用的入口（参见 `src/bin/`）。
pub struct Compiler {
    module_name: String,
    function_name: String,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            module_name: "calculator_module".to_string(),
            function_name: "compiled_func".to_string(),
        }
    }

    /// 设置输出 IR 的模块名
    pub fn with_module_name(mut self, name: &str) -> Self {
        self.module_name = name.to_string();
        self
    }

    /// 设置输出 IR 的函数名
    pub fn with_function_name(mut self, name: &str) -> Self {
        self.function_name = name.to_string();
        self
    }

    /// 清理空白并解析为 AST
    pub fn parse(&self, source: &str) -> AexResult<AstNode> {
        parse(&cleanup_input(source))
    }

    /// 编译为完整的文本 IR 模块
    pub fn compile(&self, source: &str) -> AexResult<String> {
        let tree = self.parse(source)?;
        let mut builder = IrBuilder::with_names(&self.module_name, &self.function_name);
        let ret = tree.emit(&mut builder)?;
        Ok(builder.finish(ret))
    }

    /// 解析并直接求值（执行引擎替身）
    pub fn run(&self, source: &str) -> AexResult<f64> {
        let tree = self.parse(source)?;
        tree.emit(&mut Evaluator::new())
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
