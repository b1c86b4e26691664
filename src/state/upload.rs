use crate::error::ValidationError;
use crate::models::FileType;
use crate::state::OpPhase;
use std::path::{Path, PathBuf};

/// 上传流程状态（教师端）
///
/// 文件类型只在选择时按扩展名过滤，不校验内容和大小；
/// 上传成功清空已选文件，失败则保留以便重试
#[derive(Debug, Default)]
pub struct UploadState {
    chosen: Option<PathBuf>,
    phase: OpPhase,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前已选择的文件
    pub fn chosen(&self) -> Option<&Path> {
        self.chosen.as_deref()
    }

    pub fn phase(&self) -> OpPhase {
        self.phase
    }

    /// 选择待上传的文件，只接受 PDF / TXT
    pub fn choose(&mut self, path: PathBuf) -> Result<FileType, ValidationError> {
        let file_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FileType::from_extension)
            .ok_or_else(|| ValidationError::UnsupportedFileType {
                path: path.display().to_string(),
            })?;

        self.chosen = Some(path);
        Ok(file_type)
    }

    /// 校验并取出准备上传的文件
    ///
    /// 未选择文件或上一次上传还在途时拒绝
    pub fn prepare(&mut self) -> Result<(PathBuf, FileType), ValidationError> {
        if self.phase.is_pending() {
            return Err(ValidationError::UploadInFlight);
        }

        let path = self.chosen.clone().ok_or(ValidationError::NoFileChosen)?;
        let file_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(FileType::from_extension)
            .ok_or_else(|| ValidationError::UnsupportedFileType {
                path: path.display().to_string(),
            })?;

        self.phase = OpPhase::Pending;
        Ok((path, file_type))
    }

    /// 上传成功：清空已选文件
    pub fn complete(&mut self) {
        self.chosen = None;
        self.phase = OpPhase::Ready;
    }

    /// 上传失败：已选文件保持不动
    pub fn fail(&mut self) {
        self.phase = OpPhase::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_filters_by_extension() {
        let mut state = UploadState::new();

        assert_eq!(state.choose(PathBuf::from("notes.txt")), Ok(FileType::Txt));
        assert_eq!(state.choose(PathBuf::from("slides.PDF")), Ok(FileType::Pdf));

        let rejected = state.choose(PathBuf::from("report.docx"));
        assert!(matches!(
            rejected,
            Err(ValidationError::UnsupportedFileType { .. })
        ));
        // 拒绝不影响之前的选择
        assert_eq!(state.chosen(), Some(Path::new("slides.PDF")));
    }

    #[test]
    fn test_prepare_requires_chosen_file() {
        let mut state = UploadState::new();
        assert_eq!(state.prepare().unwrap_err(), ValidationError::NoFileChosen);
    }

    #[test]
    fn test_success_clears_failure_keeps() {
        let mut state = UploadState::new();
        state.choose(PathBuf::from("lesson.pdf")).expect("应当通过");

        state.prepare().expect("应当通过");
        state.fail();
        // 失败保留已选文件，便于直接重试
        assert!(state.chosen().is_some());

        state.prepare().expect("失败后可以重试");
        state.complete();
        assert!(state.chosen().is_none());
        assert_eq!(state.phase(), OpPhase::Ready);
    }

    #[test]
    fn test_single_flight_gate() {
        let mut state = UploadState::new();
        state.choose(PathBuf::from("lesson.txt")).expect("应当通过");

        state.prepare().expect("应当通过");
        assert_eq!(state.prepare().unwrap_err(), ValidationError::UploadInFlight);
    }
}
