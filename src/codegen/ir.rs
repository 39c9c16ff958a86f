//! 文本 LLVM IR 后端
//!
//! 逐行拼装 IR 文本：常量为 `float` 立即数，加/乘为 `fadd`/`fmul`，
//! 临时寄存器按 `%t1`、`%t2` 递增编号。[`IrBuilder::finish`] 把指令
//! 序列封装为单个无参 `float` 函数的完整模块。

use super::CodeEmitter;
use crate::error::{AexResult, codegen_error};

/// 文本 IR 生成器
pub struct IrBuilder {
    module_name: String,
    function_name: String,
    lines: Vec<String>,
    temp_count: u32,
}

impl IrBuilder {
    pub fn new() -> Self {
        Self::with_names("calculator_module", "compiled_func")
    }

    /// 指定模块名与函数名
    pub fn with_names(module_name: &str, function_name: &str) -> Self {
        IrBuilder {
            module_name: module_name.to_string(),
            function_name: function_name.to_string(),
            lines: Vec::new(),
            temp_count: 0,
        }
    }

    /// 分配下一个临时寄存器名
    fn new_temp(&mut self) -> String {
        self.temp_count += 1;
        format!("%t{}", self.temp_count)
    }

    /// 追加一行函数体指令
    fn emit_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// `float` 立即数的文本形式
    ///
    /// LLVM 按 double 解析十进制字面量，再要求其能无损收窄为 float，
    /// 因此先把值收窄为 float 再按 double 的最短十进制形式输出。
    /// 非有限值与收窄后溢出的值无法编码，报结构错误。
    fn float_immediate(value: f64) -> AexResult<String> {
        if !value.is_finite() {
            return Err(codegen_error(format!(
                "cannot encode non-finite constant: {}",
                value
            )));
        }
        let narrowed = value as f32 as f64;
        if !narrowed.is_finite() {
            return Err(codegen_error(format!(
                "constant overflows float range: {}",
                value
            )));
        }
        let mut text = format!("{}", narrowed);
        if !text.contains('.') {
            text.push_str(".0");
        }
        Ok(text)
    }

    /// 以 `value` 作为返回值收尾，产出完整模块文本
    pub fn finish(mut self, value: String) -> String {
        self.emit_line(&format!("  ret float {}", value));

        let mut module = String::new();
        module.push_str(&format!("; ModuleID = '{}'\n\n", self.module_name));
        module.push_str(&format!("define float @{}() {{\n", self.function_name));
        module.push_str("entry:\n");
        for line in &self.lines {
            module.push_str(line);
            module.push('\n');
        }
        module.push_str("}\n");
        module
    }
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeEmitter for IrBuilder {
    type Value = String;

    fn emit_constant(&mut self, value: f64) -> AexResult<String> {
        Self::float_immediate(value)
    }

    fn emit_add(&mut self, lhs: String, rhs: String) -> AexResult<String> {
        let temp = self.new_temp();
        self.emit_line(&format!("  {} = fadd float {}, {}", temp, lhs, rhs));
        Ok(temp)
    }

    fn emit_mul(&mut self, lhs: String, rhs: String) -> AexResult<String> {
        let temp = self.new_temp();
        self.emit_line(&format!("  {} = fmul float {}, {}", temp, lhs, rhs));
        Ok(temp)
    }
}
