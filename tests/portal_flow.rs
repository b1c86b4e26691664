use learning_portal::config::Config;
use learning_portal::portal::{StudentPortal, TeacherPortal};
use learning_portal::utils::logging;

#[tokio::test]
#[ignore] // 默认忽略，需要后端在本地运行：cargo test -- --ignored
async fn test_student_browse_and_ask() {
    // 初始化日志
    logging::init(true);

    // 加载配置
    let config = Config::from_env();

    let mut portal = StudentPortal::new(&config);

    // 加载课程列表
    portal.load_lessons().await.expect("加载课程列表失败");
    println!("找到 {} 个课程", portal.lessons.lessons().len());

    let Some(first_id) = portal.lessons.lessons().first().map(|lesson| lesson.id) else {
        println!("后端没有课程，跳过后续步骤");
        return;
    };

    // 选课并提问
    let applied = portal.select(first_id).await.expect("加载课程详情失败");
    assert!(applied, "选课结果应当生效");

    portal
        .ask("这节课的核心内容是什么？")
        .await
        .expect("提问失败");

    let exchange = portal.exchange.answer().expect("应当有回答");
    assert!(!exchange.answer.is_empty(), "回答不应为空");
    println!("回答: {}", exchange.answer);
}

#[tokio::test]
#[ignore]
async fn test_student_search_lessons() {
    logging::init(true);

    let config = Config::from_env();
    let mut portal = StudentPortal::new(&config);

    portal.search("课程").await.expect("检索失败");
    println!("检索命中 {} 个课程", portal.lessons.lessons().len());

    // 空查询应当回到全量列表
    portal.search("   ").await.expect("空查询加载失败");
}

#[tokio::test]
#[ignore]
async fn test_teacher_lesson_with_quiz() {
    logging::init(true);

    let config = Config::from_env();
    let mut portal = TeacherPortal::new(&config);

    portal.load_lessons().await.expect("加载课程列表失败");

    let Some(first_id) = portal.lessons.lessons().first().map(|lesson| lesson.id) else {
        println!("后端没有课程，跳过后续步骤");
        return;
    };

    let applied = portal.select(first_id).await.expect("加载课程详情失败");
    assert!(applied, "选课结果应当生效");

    let quiz = portal.detail.quiz();
    println!("课程附带 {} 道测验题", quiz.len());
    for item in quiz {
        assert!(
            item.correct_answer < item.options.len(),
            "正确答案下标应当在选项范围内"
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_teacher_upload_lesson() {
    logging::init(true);

    let config = Config::from_env();
    let mut portal = TeacherPortal::new(&config);

    // 注意：请根据实际情况修改文件路径
    let path = std::path::PathBuf::from("demo_lesson.txt");
    if !path.exists() {
        println!("缺少测试文件 {}，跳过", path.display());
        return;
    }

    portal.choose_file(path).expect("选择文件失败");
    let message = portal.upload().await.expect("上传失败");
    println!("上传结果: {:?}", message);

    // 上传成功后列表应当已经刷新
    assert!(!portal.lessons.lessons().is_empty(), "上传后列表不应为空");
}
