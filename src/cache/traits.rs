use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 未命中
    NotFound,
    /// 键存在但取值失败（后端错误等）
    ExistsButNoValue,
}

/// 对象缓存统一接口
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 读取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入原始字符串值，ttl 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除键
    async fn remove(&self, key: &str);

    /// 清空缓存
    async fn invalidate_all(&self);
}
