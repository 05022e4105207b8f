//! 终端适配层
//!
//! 把学习会话接到标准输入/输出上，本身不含业务逻辑

use anyhow::{Context, Result};
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{ErrorInfo, StudyError};
use crate::models::{load_study_input, ArtifactSelection, StudyInput, StudySet};
use crate::orchestrator::{StudySession, StudySetOrchestrator};
use crate::presenter::{Command, CommandParser, HELP_TEXT};
use crate::utils::logging::{log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    orchestrator: StudySetOrchestrator,
    session: StudySession,
    commands: CommandParser,
    input: Lines<BufReader<Stdin>>,
}

impl App {
    /// 初始化应用：加载学习材料和主题
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let orchestrator = StudySetOrchestrator::from_config(&config)?;
        let mut app = Self {
            config,
            orchestrator,
            session: StudySession::new(),
            commands: CommandParser::new()?,
            input: BufReader::new(stdin()).lines(),
        };

        app.load_material().await?;
        app.load_topic().await?;

        Ok(app)
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self) -> Result<()> {
        self.generate().await;

        loop {
            let Some(line) = self.input.next_line().await.context("无法读取标准输入")? else {
                break;
            };

            match self.commands.parse(&line) {
                Some(Command::Answer {
                    number,
                    option_index,
                }) => self.answer(number, option_index),
                Some(Command::Score) => println!("{}", self.session.score()),
                Some(Command::Regenerate) => self.generate().await,
                Some(Command::Help) => println!("{}", HELP_TEXT),
                Some(Command::Quit) => break,
                None => println!("Unrecognised input. {}", HELP_TEXT),
            }
        }

        print_final_stats(&self.session.score());
        Ok(())
    }

    /// 读取学习材料：文本文件直接读取，PDF 先上传解析
    async fn load_material(&mut self) -> Result<()> {
        let Some(path) = self.config.input_file.clone() else {
            warn!("⚠️ 未配置 STUDY_INPUT_FILE，学习材料为空");
            return Ok(());
        };

        match load_study_input(&path).await? {
            StudyInput::Text(text) => self.session.set_text(text),
            StudyInput::Pdf(pdf) => {
                self.session.select_pdf(pdf);
                if self
                    .orchestrator
                    .upload_selected_pdf(&mut self.session)
                    .await
                    .is_err()
                {
                    self.print_error();
                }
            }
        }

        Ok(())
    }

    async fn load_topic(&mut self) -> Result<()> {
        if let Some(topic) = self.config.topic.clone() {
            self.session.set_topic(topic);
            return Ok(());
        }

        println!("Subject / Topic (e.g., 'French Revolution'):");
        let topic = self
            .input
            .next_line()
            .await
            .context("无法读取主题")?
            .unwrap_or_default();
        self.session.set_topic(topic.trim());

        Ok(())
    }

    async fn generate(&mut self) {
        let artifacts = ArtifactSelection {
            summary: self.config.include_summary,
            glossary: self.config.include_glossary,
        };

        println!("✨ Generating study set...");
        self.orchestrator
            .run_generation(&mut self.session, self.config.difficulty, artifacts)
            .await;

        match self.session.study_set() {
            Some(study_set) => {
                print_study_set(study_set);
                self.print_quiz();
                println!("{}", HELP_TEXT);
            }
            None => self.print_error(),
        }
    }

    fn answer(&mut self, number: usize, option_index: usize) {
        let Some(view) = self.session.question_views().into_iter().nth(number - 1) else {
            println!("There is no question {}.", number);
            return;
        };

        if view.is_answered() {
            println!("Question {} is already answered.", number);
        } else if !self.session.select_option(view.id, option_index) {
            println!("Question {} has no such option.", number);
            return;
        }

        if let Some(view) = self.session.question_views().into_iter().nth(number - 1) {
            info!("作答第 {} 题: {:?}", number, view.is_correct);
            println!("{}", view);
        }
    }

    fn print_quiz(&self) {
        if let Some(study_set) = self.session.study_set() {
            println!("Topic: {}\n", study_set.quiz.topic);
        }
        for view in self.session.question_views() {
            println!("{}", view);
        }
    }

    fn print_error(&self) {
        match self.session.error() {
            Some(info) => eprintln!("{}", info),
            None => eprintln!("{}", ErrorInfo::from(&StudyError::GenerationFailed(String::new()))),
        }
    }
}

fn print_study_set(study_set: &StudySet) {
    if let Some(summary) = &study_set.summary {
        println!("📄 Summary: {}\n\n{}\n", summary.topic, summary.summary);
    }

    if let Some(glossary) = &study_set.glossary {
        println!("📚 Glossary: {}", glossary.topic);
        for term in &glossary.terms {
            println!("  • {}: {}", term.term, term.definition);
        }
        println!();
    }
}
