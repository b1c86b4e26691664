/// 门户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// 学生端
    Student,
    /// 教师端
    Teacher,
}

impl Role {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Role::Student => "学生端",
            Role::Teacher => "教师端",
        }
    }

    /// 后端 API 路径段
    pub fn api_segment(self) -> &'static str {
        match self {
            Role::Student => "students",
            Role::Teacher => "teachers",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
