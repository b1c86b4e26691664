use crate::config::Config;
use crate::error::AppError;
use crate::models::{Exchange, Lesson, QuizItem};
use crate::portal::{StudentPortal, TeacherPortal};
use crate::utils::logging::truncate_text;
use anyhow::Result;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

type InputLines = Lines<BufReader<Stdin>>;

/// 应用主结构
///
/// 持有两个门户实例并驱动终端交互循环
pub struct App {
    student: StudentPortal,
    teacher: TeacherPortal,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self {
            student: StudentPortal::new(&config),
            teacher: TeacherPortal::new(&config),
        }
    }

    /// 运行交互主循环
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print_role_menu();
            let Some(line) = prompt(&mut lines, "> ").await? else {
                break;
            };
            match line.trim() {
                "1" | "student" => self.run_student(&mut lines).await?,
                "2" | "teacher" => self.run_teacher(&mut lines).await?,
                "q" | "quit" | "exit" => break,
                "" => {}
                other => println!("未知选项: {}", other),
            }
        }

        info!("👋 已退出");
        Ok(())
    }

    /// 学生端子循环
    async fn run_student(&mut self, lines: &mut InputLines) -> Result<()> {
        info!("📚 进入学生端");

        // 进入时加载课程列表
        if let Err(e) = self.student.load_lessons().await {
            notify(&e);
        }
        print_lessons(self.student.lessons.lessons());
        print_student_help();

        loop {
            let Some(line) = prompt(lines, "学生端> ").await? else {
                return Ok(());
            };
            let (command, arg) = split_command(&line);
            match command {
                "list" => match self.student.load_lessons().await {
                    Ok(()) => print_lessons(self.student.lessons.lessons()),
                    Err(e) => notify(&e),
                },
                "search" => match self.student.search(arg).await {
                    Ok(()) => print_lessons(self.student.lessons.lessons()),
                    Err(e) => notify(&e),
                },
                "select" => match parse_lesson_id(arg) {
                    Some(lesson_id) => match self.student.select(lesson_id).await {
                        Ok(true) => {
                            if let Some(lesson) = self.student.detail.selected() {
                                print_lesson_detail(lesson);
                            }
                        }
                        // 过期响应已被丢弃，界面维持现状
                        Ok(false) => {}
                        Err(e) => notify(&e),
                    },
                    None => println!("用法: select <课程ID>"),
                },
                "content" => {
                    match self
                        .student
                        .detail
                        .selected()
                        .and_then(|lesson| lesson.content.as_deref())
                    {
                        Some(content) => println!("\n{}", content),
                        None => println!("当前课程没有可显示的全文"),
                    }
                }
                "ask" => match self.student.ask(arg).await {
                    Ok(()) => {
                        if let Some(exchange) = self.student.exchange.answer() {
                            print_exchange(exchange);
                        }
                    }
                    Err(e) => notify(&e),
                },
                "help" => print_student_help(),
                "back" => return Ok(()),
                "" => {}
                _ => println!("未知命令: {}，输入 help 查看用法", command),
            }
        }
    }

    /// 教师端子循环
    async fn run_teacher(&mut self, lines: &mut InputLines) -> Result<()> {
        info!("🧑‍🏫 进入教师端");

        if let Err(e) = self.teacher.load_lessons().await {
            notify(&e);
        }
        print_lessons(self.teacher.lessons.lessons());
        print_teacher_help();

        loop {
            let Some(line) = prompt(lines, "教师端> ").await? else {
                return Ok(());
            };
            let (command, arg) = split_command(&line);
            match command {
                "list" => match self.teacher.load_lessons().await {
                    Ok(()) => print_lessons(self.teacher.lessons.lessons()),
                    Err(e) => notify(&e),
                },
                "select" => match parse_lesson_id(arg) {
                    Some(lesson_id) => match self.teacher.select(lesson_id).await {
                        Ok(true) => {
                            if let Some(lesson) = self.teacher.detail.selected() {
                                print_lesson_detail(lesson);
                            }
                            print_quiz(self.teacher.detail.quiz());
                        }
                        Ok(false) => {}
                        Err(e) => notify(&e),
                    },
                    None => println!("用法: select <课程ID>"),
                },
                "choose" => {
                    if arg.is_empty() {
                        println!("用法: choose <文件路径>");
                    } else if let Err(e) = self.teacher.choose_file(PathBuf::from(arg)) {
                        notify(&e);
                    }
                }
                "upload" => {
                    if !arg.is_empty() {
                        if let Err(e) = self.teacher.choose_file(PathBuf::from(arg)) {
                            notify(&e);
                            continue;
                        }
                    }
                    match self.teacher.upload().await {
                        Ok(message) => {
                            info!(
                                "✅ {}",
                                message.unwrap_or_else(|| "课程上传成功".to_string())
                            );
                            print_lessons(self.teacher.lessons.lessons());
                        }
                        Err(e) => notify(&e),
                    }
                }
                "help" => print_teacher_help(),
                "back" => return Ok(()),
                "" => {}
                _ => println!("未知命令: {}，输入 help 查看用法", command),
            }
        }
    }
}

/// 打印提示符并读取一行输入，EOF 时返回 None
async fn prompt(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    use std::io::Write as _;
    print!("{}", label);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// 以阻塞提示的方式向用户报告错误
///
/// 报告后界面回到可交互状态，不做自动重试
fn notify(err: &AppError) {
    error!("❌ {}", err.user_message());
}

/// 拆分命令与参数
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}

fn parse_lesson_id(arg: &str) -> Option<i64> {
    arg.trim().parse().ok()
}

// ========== 渲染辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 AI 学习助手客户端启动");
    info!("🌐 后端地址: {}", config.api_base_url);
    info!("{}", "=".repeat(60));
}

fn print_role_menu() {
    println!("\n{}", "=".repeat(60));
    println!("AI 学习助手");
    println!("  1. 学生端 - 浏览课程并提问");
    println!("  2. 教师端 - 上传文档并查看生成内容");
    println!("  q. 退出");
    println!("{}", "=".repeat(60));
}

fn print_student_help() {
    println!("\n可用命令:");
    println!("  list              重新加载课程列表");
    println!("  search <关键词>   检索课程（留空等于 list）");
    println!("  select <课程ID>   查看课程讲解");
    println!("  content           查看当前课程全文");
    println!("  ask <问题>        针对当前课程提问");
    println!("  back              返回角色菜单");
}

fn print_teacher_help() {
    println!("\n可用命令:");
    println!("  list              重新加载课程列表");
    println!("  select <课程ID>   查看课程讲解与测验");
    println!("  choose <路径>     选择待上传的 PDF/TXT 文档");
    println!("  upload [路径]     上传已选文档（可直接带路径）");
    println!("  back              返回角色菜单");
}

fn print_lessons(lessons: &[Lesson]) {
    if lessons.is_empty() {
        println!("（暂无课程）");
        return;
    }

    println!("\n共 {} 个课程:", lessons.len());
    for lesson in lessons {
        let date = lesson.created_date().unwrap_or_default();
        println!(
            "  [{}] {} ({}) {}",
            lesson.id, lesson.title, lesson.file_type, date
        );
        if let Some(explanation) = lesson.explanation.as_deref() {
            if !explanation.is_empty() {
                println!("      {}", truncate_text(explanation, 40));
            }
        }
    }
}

fn print_lesson_detail(lesson: &Lesson) {
    println!("\n{}", "─".repeat(60));
    println!("《{}》", lesson.title);
    println!("文件: {} ({})", lesson.filename, lesson.file_type);
    if let Some(date) = lesson.created_date() {
        println!("创建于: {}", date);
    }
    match lesson.explanation.as_deref() {
        Some(explanation) if !explanation.is_empty() => {
            println!("\n讲解:\n{}", explanation);
        }
        _ => println!("\n（该课程暂无讲解）"),
    }
    println!("{}", "─".repeat(60));
}

fn print_quiz(quiz: &[QuizItem]) {
    if quiz.is_empty() {
        println!("（暂无测验）");
        return;
    }

    println!("\n生成的测验（共 {} 题，✓ 为正确答案）:", quiz.len());
    for (index, item) in quiz.iter().enumerate() {
        println!("\n{}. {}", index + 1, item.question);
        for (option_index, option) in item.options.iter().enumerate() {
            let marker = if item.is_correct(option_index) { "✓" } else { " " };
            println!("   {} {}. {}", marker, option_label(option_index), option);
        }
    }
}

/// 选项序号转字母标签（0 → A）
fn option_label(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}

fn print_exchange(exchange: &Exchange) {
    println!("\n{}", "─".repeat(60));
    println!("Q: {}", exchange.question);
    println!("A: {}", exchange.answer);
    if !exchange.relevant_sections.is_empty() {
        println!("\n相关段落:");
        for section in &exchange.relevant_sections {
            println!("  - {}", truncate_text(section, 80));
        }
    }
    println!("（来自课程《{}》）", exchange.lesson_title);
    println!("{}", "─".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("list"), ("list", ""));
        assert_eq!(split_command("  select 3 "), ("select", "3"));
        assert_eq!(
            split_command("ask 什么是 光合作用？"),
            ("ask", "什么是 光合作用？")
        );
    }

    #[test]
    fn test_parse_lesson_id() {
        assert_eq!(parse_lesson_id("3"), Some(3));
        assert_eq!(parse_lesson_id(" 42 "), Some(42));
        assert_eq!(parse_lesson_id("abc"), None);
        assert_eq!(parse_lesson_id(""), None);
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(3), 'D');
    }
}
