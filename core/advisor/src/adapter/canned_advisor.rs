//! 決め打ちの推奨サービス（AdvisorService のスタブ実装）
//!
//! 入力クエリによらず、固定の判断レコード 3 件とプロジェクト文脈ブロックを
//! 返す。再生成も同じコンテンツを ID で引き直すだけ。実推論エンドポイントへの
//! 差し替えはこのポートの別実装として行う。

use crate::domain::{JudgmentContent, JudgmentId, ProjectId};
use crate::ports::outbound::{Advice, AdviceRequest, AdvisorService};
use common::error::Error;

/// 決め打ちコンテンツを返す推奨サービス
pub struct CannedAdvisor;

impl AdvisorService for CannedAdvisor {
    fn advise(&self, _req: &AdviceRequest) -> Result<Advice, Error> {
        Ok(Advice {
            label: "结构化分析".to_string(),
            cards: vec![judgment_1(), judgment_2(), judgment_3()],
            context_html: context_html(),
        })
    }

    fn regenerate(
        &self,
        _project: ProjectId,
        judgment: JudgmentId,
    ) -> Result<JudgmentContent, Error> {
        match judgment {
            JudgmentId(1) => Ok(judgment_1()),
            JudgmentId(2) => Ok(judgment_2()),
            JudgmentId(3) => Ok(judgment_3()),
            JudgmentId(other) => Err(Error::invalid_argument(format!(
                "unknown judgment id: {}",
                other
            ))),
        }
    }
}

fn judgment_1() -> JudgmentContent {
    JudgmentContent {
        id: JudgmentId(1),
        title: "判断1：问题不是技术能力，而是如何在有限资源下快速验证真实付费需求"
            .to_string(),
        subtitle: "不要盲目扩大数据标注规模，先用小样本验证商业模式".to_string(),
        body_html: r#"<h5>💡 一句话核心建议</h5>
<p>先用现有数据验证付费客户，再扩标注量</p>
<h5>🎯 问题本质判断</h5>
<p><strong>真正的问题：</strong>你们把"锅里"的问题(数据标注规模)当成了"碗里"的问题(是否有人愿意为现有准确率付费)。</p>
<p><strong>根本矛盾：</strong>在未验证商业模式之前，追求更高准确率是资源错配——应该先用现有95%准确率去找愿意付费的细分场景，验证PMF，再决定是否需要更多数据。</p>
<h5>📊 核心判断依据</h5>
<ul>
<li>✅ 技术基础已验证：95%准确率已达行业中上水平</li>
<li>❌ 商业模式未验证：无真实付费客户和收入</li>
<li>❌ 需求场景模糊：不清楚谁会为此付多少钱</li>
<li>⚠️ 资源极度受限：团队规模、现金流、时间窗口</li>
<li>⚠️ 标注成本高昂：医疗数据标注单价高且周期长</li>
</ul>
<h5>🚀 执行路径</h5>
<p><strong>第1步 (本周内)：</strong>冻结新标注计划，盘点现有标注数据可支撑的病种和场景。确定3-5个最有商业价值的细分场景(如肺结节筛查、糖尿病视网膜病变)。</p>
<p><strong>第2步 (未来2周)：</strong>针对选定场景，接触10-15家目标医院/体检中心，做深度需求访谈。</p>
<p><strong>第3步 (第3-4周)：</strong>若有2家以上明确付费意向，立即启动POC合作，签订试点协议。若无明确意向，重新审视产品定位。</p>
<h5>⚠️ 情况预案</h5>
<p><strong>底线原则：</strong>在获得至少1个真实付费承诺(签约金额≥50万)之前，绝不投入超过现有20%资源用于扩大数据标注。</p>
<p>📖 参考：陆奇创业方法论 - 「碗里/锅里/田里」框架、PMF验证清单</p>"#
            .to_string(),
    }
}

fn judgment_2() -> JudgmentContent {
    JudgmentContent {
        id: JudgmentId(2),
        title: "判断2：真正的风险是时间窗口，医疗AI赛道正在快速收窄".to_string(),
        subtitle: "必须在6个月内找到可复制的商业模式，否则将失去融资机会".to_string(),
        body_html: r#"<h5>💡 一句话核心建议</h5>
<p>锁定单一场景，6个月内签3家付费客户</p>
<h5>🎯 问题本质判断</h5>
<p><strong>真正的问题：</strong>你们陷入了"技术完美主义陷阱"——把有限的时间和资源用于提升技术指标，而非验证商业模式。</p>
<p><strong>根本矛盾：</strong>医疗AI的窗口期正在关闭(大厂布局、政策收紧、客户教育成本高)，你们没有时间追求完美产品，必须用"够用"的产品快速占领细分市场。</p>
<h5>📊 核心判断依据</h5>
<ul>
<li>✅ 赛道有需求：医疗影像诊断市场规模大且增长快</li>
<li>❌ 竞争加剧：腾讯、阿里、科大讯飞等已深度布局</li>
<li>❌ 客户决策周期长：医院采购流程复杂，需6-12个月</li>
<li>⚠️ 现金流紧张：按当前烧钱速度，跑道不足12个月</li>
<li>⚠️ 监管政策不确定：NMPA认证周期长且要求高</li>
</ul>
<h5>🚀 执行路径</h5>
<p><strong>第1步 (第1个月)：</strong>聚焦单一病种+单一客户类型。建议选择：肺结节筛查+民营体检中心(决策快、付费能力强)。</p>
<p><strong>第2步 (第2-3个月)：</strong>用现有产品快速签约1-2家标杆客户，哪怕降价甚至免费试用。关键是拿到真实使用数据和客户背书。</p>
<p><strong>第3步 (第4-6个月)：</strong>基于标杆案例，复制3-5家付费客户。同步启动A轮融资准备。目标估值：8000万-1亿。</p>
<h5>⚠️ 情况预案</h5>
<p><strong>底线原则：</strong>若3个月内无法签下首个付费客户(金额≥30万/年)，立即调整方向或考虑并购退出。</p>
<p>📖 参考：融资节奏把控、早期客户开发策略</p>"#
            .to_string(),
    }
}

fn judgment_3() -> JudgmentContent {
    JudgmentContent {
        id: JudgmentId(3),
        title: "判断3：团队能力与目标错配，需要立即补充商业化人才".to_string(),
        subtitle: "技术团队无法独自完成商业验证，必须引入有医疗行业销售经验的合伙人"
            .to_string(),
        body_html: r#"<h5>💡 一句话核心建议</h5>
<p>2周内锁定医疗销售合伙人，给20%股权</p>
<h5>🎯 问题本质判断</h5>
<p><strong>真正的问题：</strong>你们是技术驱动团队，擅长"做产品"，但医疗AI的核心壁垒在"卖产品"(客户关系、政策合规、商业模式设计)。</p>
<p><strong>根本矛盾：</strong>当前团队构成(3个技术背景创始人)无法独立完成商业化验证，继续由技术团队主导商业决策，会持续犯"用技术思维解决商业问题"的错误。</p>
<h5>📊 核心判断依据</h5>
<ul>
<li>✅ 技术能力强：团队AI/算法背景扎实</li>
<li>❌ 商业能力弱：无医疗行业销售经验和客户资源</li>
<li>❌ 决策偏技术：过度关注技术指标，忽视商业本质</li>
<li>⚠️ 学习成本高：从零摸索医疗行业销售需要1-2年</li>
<li>⚠️ 机会窗口窄：团队没有时间边学边做</li>
</ul>
<h5>🚀 执行路径</h5>
<p><strong>第1步 (本周)：</strong>明确合伙人画像：10年以上医疗行业经验、有成功销售大单经历(单笔≥500万)、有医院院长/科室主任级别人脉。</p>
<p><strong>第2步 (未来2周)：</strong>通过多渠道寻找候选人(投资人推荐、猎头、行业峰会)，快速面试5-10人。</p>
<p><strong>第3步 (第3-4周)：</strong>确定合伙人后，给予15-20%股权+销售提成激励。明确分工：合伙人全权负责商业化，技术团队专注产品交付和迭代。</p>
<h5>⚠️ 情况预案</h5>
<p><strong>底线原则：</strong>若1个月内找不到合适合伙人，立即聘请有医疗行业经验的顾问(月薪5-8万+期权)，同时CEO必须全职投入商业化。</p>
<p>📖 参考：创始团队搭建原则、早期股权分配方案</p>"#
            .to_string(),
    }
}

/// メッセージ末尾に付く固定のプロジェクト文脈ブロック
fn context_html() -> String {
    r#"<h3>📋 项目上下文</h3>
<h4>StudySpace - AI驱动的成长关系匹配平台</h4>
<p>用AI精准匹配最合适的导师和成长搭子,即时视频通话,帮助年轻人找到个性化成长路径。长期愿景是替代僵硬教育体系,打造"为每个人量身定制的学校"。</p>
<h5>创始团队</h5>
<p><strong>彭麟雅</strong>(CEO/Founder) 剑桥大学经济系本科;bilibili 150万粉丝学习类内容创作者(150M+总播放量);大学期间从0到1打造$1.5M营收电商品牌;2020年起手动撮合6400+次导师学生匹配,深度理解用户需求。</p>
<p><strong>技术亮点</strong>: 基于LiveKit低延时WebRTC部署+LLM向量匹配+语义搜索,保证&lt;200ms视频通话延迟和精准推荐。</p>
<p><strong>短板</strong>: 团队只有2人(1位全职工程师),缺乏校园BD经验,技术深度有限(依赖开源方案)。</p>
<h5>项目进展 (2025年10月)</h5>
<ul>
<li><strong>产品阶段</strong>: MVP已上线(Web端),APP开发中,导师市集功能迭代中</li>
<li><strong>用户数</strong>: 46,000总注册,39,906 MAU,3,700付费用户</li>
<li><strong>营收</strong>: $382K ARR(bootstrap,0广告投放),50% MoM增长</li>
<li><strong>留存</strong>: D1/D7/D30: 68%/33%/18%(无APP/无push,纯Web端MVP)</li>
<li><strong>重度用户</strong>: 1,348人(周均2小时+),77.74%付费率,人均付费¥116.64</li>
</ul>"#
        .to_string()
}
