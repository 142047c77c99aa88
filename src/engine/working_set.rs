// ==========================================
// 家庭住房分配系统 - 分配工作集（写时复制事务）
// ==========================================
// 职责: 对楼栋组的分配记录做快照，尝试分配，全部成功才提交
// 红线: 未提交的工作集被丢弃时，原记录保持不变
// ==========================================

use crate::domain::family::Family;
use crate::engine::allocation_record::AllocationRecord;

// ==========================================
// WorkingSet - 分配工作集
// ==========================================
// begin → try_assign_first_fit ... → commit
// 不调用 commit 直接 drop 即回滚
pub struct WorkingSet<'a> {
    target: &'a mut Vec<AllocationRecord>,
    draft: Vec<AllocationRecord>,
}

impl<'a> WorkingSet<'a> {
    /// 对目标记录做快照，开启工作集
    pub fn begin(target: &'a mut Vec<AllocationRecord>) -> Self {
        let draft = target.clone();
        Self { target, draft }
    }

    /// 首次适配：按楼栋原始顺序找到第一个能入住的楼栋
    ///
    /// # 返回
    /// - Some(index): 入住楼栋在组内的下标
    /// - None: 组内没有可入住的楼栋（草稿不变）
    pub fn try_assign_first_fit(&mut self, family: &Family, family_group: &str) -> Option<usize> {
        self.draft
            .iter_mut()
            .position(|record| record.try_assign(family, family_group))
    }

    /// 提交：用草稿替换目标记录
    pub fn commit(self) {
        let WorkingSet { target, draft } = self;
        *target = draft;
    }

    /// 显式回滚（等价于 drop）
    pub fn rollback(self) {}
}
