//! 裸符号扫描
//!
//! 不经分词、直接在原始子串上识别括号分组的唯一机制。
//! 优先级逻辑只通过本模块感知括号，若将来引入分词器，仅需替换这里。

/// 查找首个不在任何括号内的目标符号，返回其字节下标
///
/// 扫描时维护括号嵌套计数，遇 `(` 加一、遇 `)` 减一，
/// 仅当计数恰为零时命中目标符号。找不到返回 `None`。
pub(crate) fn naked_symbol_search(expr: &str, targets: &[char]) -> Option<usize> {
    let mut depth: i32 = 0;
    for (idx, sym) in expr.char_indices() {
        match sym {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {
                if depth == 0 && targets.contains(&sym) {
                    return Some(idx);
                }
            }
        }
    }
    None
}

/// 判断整个子串是否恰为一对匹配括号包裹的分组
///
/// 只比较首尾字符并不充分（如 `(1+2)*(3+4)` 的首尾括号并不配对）：
/// 扫描内部时计数一旦为负，说明首括号已在中途闭合。
pub(crate) fn is_enclosed_group(expr: &str) -> bool {
    if expr.len() < 2 || !expr.starts_with('(') || !expr.ends_with(')') {
        return false;
    }
    let interior = &expr[1..expr.len() - 1];
    let mut depth: i32 = 0;
    for sym in interior.chars() {
        match sym {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

/// 一次性清理输入：移除全部空白字符
pub fn cleanup_input(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
