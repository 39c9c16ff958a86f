use std::env;
use std::fs;
use std::process;

use aex::{Compiler, cleanup_input};
use anyhow::Context;

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct CompileOptions {
    emit_ir: bool, // --emit-ir: 在标准输出打印生成的 IR 模块
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions { emit_ir: false }
    }
}

fn print_usage() {
    println!("aexc v{}", VERSION);
    println!("Usage: aexc [options] \"<expression>\" [output_file.ll]");
    println!("");
    println!("Options:");
    println!("  --emit-ir             打印生成的 IR 模块");
    println!("  --version, -v         显示版本号");
    println!("  --help, -h            显示帮助信息");
    println!("");
    println!("Examples:");
    println!("  aexc \"1+2*3\"");
    println!("  aexc --emit-ir \"(1 + 2) * 3\"");
    println!("  aexc \"(1+2)*3\" expr.ll");
}

fn parse_args(args: &[String]) -> Result<(CompileOptions, String, Option<String>), String> {
    let mut options = CompileOptions::default();
    let mut expression: Option<String> = None;
    let mut output_file: Option<String> = None;
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--version" | "-v" => {
                println!("aexc v{}", VERSION);
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--emit-ir" => {
                options.emit_ir = true;
            }
            _ => {
                if arg.starts_with("--") {
                    return Err(format!("未知选项: {}", arg));
                }
                if expression.is_none() {
                    expression = Some(arg.clone());
                } else if output_file.is_none() {
                    output_file = Some(arg.clone());
                } else {
                    return Err(format!("多余参数: {}", arg));
                }
            }
        }
        i += 1;
    }

    let expression = expression.ok_or("需要指定表达式")?;
    Ok((options, expression, output_file))
}

fn run(
    options: &CompileOptions,
    expression: &str,
    output_file: Option<&str>,
) -> anyhow::Result<()> {
    let compiler = Compiler::new();
    let source = cleanup_input(expression);

    let module = compiler.compile(&source)?;

    if options.emit_ir {
        println!("{}", module);
    }
    if let Some(path) = output_file {
        fs::write(path, &module).with_context(|| format!("无法写入输出文件: {}", path))?;
    }

    let result = compiler.run(&source)?;
    println!("{} = {}", source, result);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (options, expression, output_file) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("错误: {}", msg);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = run(&options, &expression, output_file.as_deref()) {
        eprintln!("错误: {:#}", err);
        process::exit(1);
    }
}
