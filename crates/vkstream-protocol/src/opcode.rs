//! Call opcodes.
//!
//! Opcodes start at 20000 and follow the core API's command order, so gaps belong to calls this
//! stream does not carry.

macro_rules! opcodes {
    ($($variant:ident = $value:literal => $name:literal,)*) => {
        #[repr(u32)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Opcode {
            $($variant = $value,)*
        }

        impl Opcode {
            pub const ALL: &'static [Opcode] = &[$(Opcode::$variant,)*];

            pub const fn from_u32(v: u32) -> Option<Self> {
                match v {
                    $($value => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// API entry point name, e.g. `vkCreateBuffer`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

opcodes! {
    CreateInstance = 20000 => "vkCreateInstance",
    DestroyInstance = 20001 => "vkDestroyInstance",
    EnumeratePhysicalDevices = 20002 => "vkEnumeratePhysicalDevices",
    GetPhysicalDeviceFormatProperties = 20004 => "vkGetPhysicalDeviceFormatProperties",
    CreateDevice = 20011 => "vkCreateDevice",
    DestroyDevice = 20012 => "vkDestroyDevice",
    GetDeviceQueue = 20017 => "vkGetDeviceQueue",
    QueueSubmit = 20018 => "vkQueueSubmit",
    QueueWaitIdle = 20019 => "vkQueueWaitIdle",
    DeviceWaitIdle = 20020 => "vkDeviceWaitIdle",
    AllocateMemory = 20021 => "vkAllocateMemory",
    FreeMemory = 20022 => "vkFreeMemory",
    FlushMappedMemoryRanges = 20025 => "vkFlushMappedMemoryRanges",
    InvalidateMappedMemoryRanges = 20026 => "vkInvalidateMappedMemoryRanges",
    BindBufferMemory = 20028 => "vkBindBufferMemory",
    BindImageMemory = 20029 => "vkBindImageMemory",
    GetBufferMemoryRequirements = 20030 => "vkGetBufferMemoryRequirements",
    GetImageMemoryRequirements = 20031 => "vkGetImageMemoryRequirements",
    CreateFence = 20035 => "vkCreateFence",
    DestroyFence = 20036 => "vkDestroyFence",
    ResetFences = 20037 => "vkResetFences",
    GetFenceStatus = 20038 => "vkGetFenceStatus",
    WaitForFences = 20039 => "vkWaitForFences",
    CreateSemaphore = 20040 => "vkCreateSemaphore",
    DestroySemaphore = 20041 => "vkDestroySemaphore",
    CreateBuffer = 20050 => "vkCreateBuffer",
    DestroyBuffer = 20051 => "vkDestroyBuffer",
    CreateImage = 20054 => "vkCreateImage",
    DestroyImage = 20055 => "vkDestroyImage",
    CreateImageView = 20057 => "vkCreateImageView",
    DestroyImageView = 20058 => "vkDestroyImageView",
    CreateShaderModule = 20059 => "vkCreateShaderModule",
    DestroyShaderModule = 20060 => "vkDestroyShaderModule",
    CreatePipelineCache = 20061 => "vkCreatePipelineCache",
    DestroyPipelineCache = 20062 => "vkDestroyPipelineCache",
    CreateGraphicsPipelines = 20065 => "vkCreateGraphicsPipelines",
    DestroyPipeline = 20067 => "vkDestroyPipeline",
    CreatePipelineLayout = 20068 => "vkCreatePipelineLayout",
    DestroyPipelineLayout = 20069 => "vkDestroyPipelineLayout",
    CreateSampler = 20070 => "vkCreateSampler",
    DestroySampler = 20071 => "vkDestroySampler",
    CreateDescriptorSetLayout = 20072 => "vkCreateDescriptorSetLayout",
    DestroyDescriptorSetLayout = 20073 => "vkDestroyDescriptorSetLayout",
    CreateDescriptorPool = 20074 => "vkCreateDescriptorPool",
    DestroyDescriptorPool = 20075 => "vkDestroyDescriptorPool",
    AllocateDescriptorSets = 20077 => "vkAllocateDescriptorSets",
    UpdateDescriptorSets = 20079 => "vkUpdateDescriptorSets",
    CreateFramebuffer = 20080 => "vkCreateFramebuffer",
    DestroyFramebuffer = 20081 => "vkDestroyFramebuffer",
    CreateRenderPass = 20082 => "vkCreateRenderPass",
    DestroyRenderPass = 20083 => "vkDestroyRenderPass",
    CreateCommandPool = 20085 => "vkCreateCommandPool",
    DestroyCommandPool = 20086 => "vkDestroyCommandPool",
    AllocateCommandBuffers = 20088 => "vkAllocateCommandBuffers",
    FreeCommandBuffers = 20089 => "vkFreeCommandBuffers",
    BeginCommandBuffer = 20090 => "vkBeginCommandBuffer",
    EndCommandBuffer = 20091 => "vkEndCommandBuffer",
    CmdBindPipeline = 20093 => "vkCmdBindPipeline",
    CmdSetViewport = 20094 => "vkCmdSetViewport",
    CmdSetScissor = 20095 => "vkCmdSetScissor",
    CmdBindDescriptorSets = 20103 => "vkCmdBindDescriptorSets",
    CmdBindIndexBuffer = 20104 => "vkCmdBindIndexBuffer",
    CmdBindVertexBuffers = 20105 => "vkCmdBindVertexBuffers",
    CmdDraw = 20106 => "vkCmdDraw",
    CmdDrawIndexed = 20107 => "vkCmdDrawIndexed",
    CmdCopyBufferToImage = 20115 => "vkCmdCopyBufferToImage",
    CmdCopyImageToBuffer = 20116 => "vkCmdCopyImageToBuffer",
    CmdClearColorImage = 20119 => "vkCmdClearColorImage",
    CmdClearAttachments = 20121 => "vkCmdClearAttachments",
    CmdPipelineBarrier = 20126 => "vkCmdPipelineBarrier",
    CmdBeginRenderPass = 20133 => "vkCmdBeginRenderPass",
    CmdEndRenderPass = 20135 => "vkCmdEndRenderPass",
}

impl Opcode {
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}
