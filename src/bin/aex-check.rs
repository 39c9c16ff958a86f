use std::env;
use std::process;

use aex::Compiler;

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct CheckOptions {
    show_ast: bool, // --ast: 打印解析得到的语法树
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions { show_ast: false }
    }
}

fn print_usage() {
    println!("aex-check v{}", VERSION);
    println!("Usage: aex-check [options] \"<expression>\"");
    println!("");
    println!("Options:");
    println!("  --ast                 打印解析得到的语法树");
    println!("  --version, -v         显示版本号");
    println!("  --help, -h            显示帮助信息");
    println!("");
    println!("Examples:");
    println!("  aex-check \"1+2*3\"");
    println!("  aex-check --ast \"(1+2)*3\"");
}

fn parse_args(args: &[String]) -> Result<(CheckOptions, String), String> {
    let mut options = CheckOptions::default();
    let mut expression: Option<String> = None;
    let mut i = 1;

    while i < args.len() {
        let arg = &args[i];

        match arg.as_str() {
            "--version" | "-v" => {
                println!("aex-check v{}", VERSION);
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--ast" => {
                options.show_ast = true;
            }
            _ => {
                if arg.starts_with("--") {
                    return Err(format!("未知选项: {}", arg));
                }
                if expression.is_none() {
                    expression = Some(arg.clone());
                } else {
                    return Err(format!("多余参数: {}", arg));
                }
            }
        }
        i += 1;
    }

    let expression = expression.ok_or("需要指定表达式")?;
    Ok((options, expression))
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (options, expression) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("错误: {}", msg);
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    match Compiler::new().parse(&expression) {
        Ok(tree) => {
            if options.show_ast {
                println!("{:#?}", tree);
            }
            println!("ok: {}", tree);
        }
        Err(err) => {
            eprintln!("错误: {}", err);
            process::exit(1);
        }
    }
}
