/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::wide::U256;

/// `POW5_TABLE[k] == 5^k` exactly, for `0 <= k <= 55`.
#[rustfmt::skip]
pub(crate) const POW5_TABLE: [u128; 56] = [
    0x00000000000000000000000000000001,
    0x00000000000000000000000000000005,
    0x00000000000000000000000000000019,
    0x0000000000000000000000000000007D,
    0x00000000000000000000000000000271,
    0x00000000000000000000000000000C35,
    0x00000000000000000000000000003D09,
    0x0000000000000000000000000001312D,
    0x0000000000000000000000000005F5E1,
    0x000000000000000000000000001DCD65,
    0x000000000000000000000000009502F9,
    0x00000000000000000000000002E90EDD,
    0x0000000000000000000000000E8D4A51,
    0x00000000000000000000000048C27395,
    0x0000000000000000000000016BCC41E9,
    0x0000000000000000000000071AFD498D,
    0x00000000000000000000002386F26FC1,
    0x0000000000000000000000B1A2BC2EC5,
    0x0000000000000000000003782DACE9D9,
    0x000000000000000000001158E460913D,
    0x0000000000000000000056BC75E2D631,
    0x00000000000000000001B1AE4D6E2EF5,
    0x0000000000000000000878678326EAC9,
    0x0000000000000000002A5A058FC295ED,
    0x000000000000000000D3C21BCECCEDA1,
    0x00000000000000000422CA8B0A00A425,
    0x000000000000000014ADF4B7320334B9,
    0x00000000000000006765C793FA10079D,
    0x000000000000000204FCE5E3E2502611,
    0x000000000000000A18F07D736B90BE55,
    0x00000000000000327CB2734119D3B7A9,
    0x00000000000000FC6F7C40458122964D,
    0x00000000000004EE2D6D415B85ACEF81,
    0x00000000000018A6E32246C99C60AD85,
    0x0000000000007B426FAB61F00DE36399,
    0x000000000002684C2E58E9B04570F1FD,
    0x00000000000C097CE7BC90715B34B9F1,
    0x00000000003C2F7086AED236C807A1B5,
    0x00000000012CED32A16A1B11E8262889,
    0x0000000005E0A1FD2712875988BECAAD,
    0x000000001D6329F1C35CA4BFABB9F561,
    0x0000000092EFD1B8D0CF37BE5AA1CAE5,
    0x00000002DEAF189C140C16B7C528F679,
    0x0000000E596B7B0C643C7196D9CCD05D,
    0x00000047BF19673DF52E37F2410011D1,
    0x00000166BB7F0435C9E717BB45005915,
    0x00000701A97B150CF18376A85901BD69,
    0x000023084F676940B7915149BD08B30D,
    0x0000AF298D050E4395D69670B12B7F41,
    0x00036BCFC1194751ED30F03375D97C45,
    0x00111B0EC57E6499A1F4B1014D3F6D59,
    0x00558749DB77F70029C77506823D22BD,
    0x01ABA4714957D300D0E549208B31ADB1,
    0x085A36366EB71F04147A6DA2B7F86475,
    0x29C30F1029939B146664242D97D9F649,
    0xD0CF4B50CFE20765FFF4B4E3F741CF6D,
];

/// `5^(k*56)` normalized to 249 significant bits, for `k` in `0..89`.
#[rustfmt::skip]
pub(crate) const POW5_SPLIT: [U256; 89] = [
    U256::new(0x00000000000000000000000000000000, 0x01000000000000000000000000000000),
    U256::new(0x48400000000000000000000000000000, 0x0105031E2503DA893F7FF1E21CF51243),
    U256::new(0x60E94FDE0330F2212EA2EEBEE3D257E5, 0x010A1F5B813246653C07C59ED78C09BB),
    U256::new(0x85F6231F93842F43A5640967B2D0DEAB, 0x010F5535FEF208450D21F689A5E0BA10),
    U256::new(0xDF78218B8B9B52F91BAF2497FF066293, 0x0114A52DFFC679925F057AD6E1B33554),
    U256::new(0xD0FD8C6E61EA01680D4CFA0E5A78FF42, 0x011A0FC668AAC6FD65B61690F6C847C3),
    U256::new(0x632920C7B148DE181CA8DE546BB86CFC, 0x011F9584AEAB1DC9CC42749E154BD14F),
    U256::new(0xBE405B12A22D552D7CA0C234C4381DC7, 0x012536F0E3BCFE45723860DEBA3616BF),
    U256::new(0x6E7823B0861AB89005FF4CE7144FB9EF, 0x012AF495C3D7EFE7A74FD53910719D28),
    U256::new(0xD050974C01DD3EC606B7E6D81E817BD3, 0x0130CF00C24FD9C9E97E3A9395999ABC),
    U256::new(0xE4E7E4DD705ED700CD4DD26F069DA25C, 0x0136C6C21772487C8CCAA9298B92BAEF),
    U256::new(0xAB1F0D0D11F1D6F3D619A96ECC15B8D2, 0x013CDC6CCE67F0AAC205C010727FAC16),
    U256::new(0xBB0982143A45EB5B8A7DF7300FB0DA78, 0x01431096D35BC492C8ABC09B749677A9),
    U256::new(0x7E3F8046E188A34EABE0CA112803BE67, 0x014963D901E8F9095A896444E83D63D7),
    U256::new(0xDEEB2667019D6A09194C5A1B506DF9CF, 0x014FD6CF33D15D933239E94B877813F4),
    U256::new(0xB90058810A0D1A5BAAF4801BF041E12D, 0x01566A184FFD7215987894AEA2A36529),
    U256::new(0x6A825FD3CE55FA6ABDE916A26EBBE0DD, 0x015D1E5659C7ABB7D30E151B0E473B1E),
    U256::new(0x59CA7FA7F96B69BE4B103106A4326024, 0x0163F42E809461CBD1BB253E1387DFEB),
    U256::new(0xFC6FDB05FD38EBF99E4E19B3E2691D66, 0x016AEC492FB7E2F53C32636B0752863A),
    U256::new(0x0CD4ECD37BF8DED33912336034B67B3D, 0x017207521EAC3A4BC5C61B607C1F1BA5),
    U256::new(0x8AFFC81BDFC2FCABEBE08C2A4D684035, 0x017945F8619833E1213D6B9632C8EA11),
    U256::new(0x4A1B763882DD7CCC3FACF7E6A8452F17, 0x0180A8EE7A2937E4D6497A98000855A2),
    U256::new(0xC6DD58610B2879981FBA126325DEAA11, 0x018830EA68C19B9952FD461B7AFD48F3),
    U256::new(0x9CBABAB52A33C69485FC9FE41B6DA4BB, 0x018FDEA5BDFD0F6EA2EC9E99F22D69BD),
    U256::new(0x6EE486A50D75E1D09DB15BF65C009298, 0x0197B2DDAC8CD9E1037D6FF7B8397D16),
    U256::new(0xC618D721710E9AA313C0F83C8709EB29, 0x019FAE531B6D972CE5B9C8E58C33547E),
    U256::new(0x9FD51A2D7B2A89C91CBBB2058D1F4891, 0x01A7D1CAB8783E87A1C8FBDF829480DC),
    U256::new(0xD3D5CD85086EA5586A2447AF26AF7DB9, 0x01B01E0D0B503655036E2AF8C144940A),
    U256::new(0x97998A5846DBD9AEF19FEE5AC978F3C8, 0x01B893E688B049C6C1F61731ED7789E1),
    U256::new(0x2ABC57BBAFA2553C846E63EED720BBFF, 0x01C13427A6185B74C58D8D82EC9C08FC),
    U256::new(0x75783476E4D6F1328FD6B1B1DE55B4F8, 0x01C9FFA4EDDDB9CCB10FD1B9F813B786),
    U256::new(0x9F51E128817D2F7FCC4934B80DB8BABB, 0x01D2F73713A003B5676346C8551B479E),
    U256::new(0xF7840AF1F470A291177E69FEF2C60519, 0x01DC1BBB09249571185A80E1E6764356),
    U256::new(0x9DAD233C082253434E005A0A2262E6C3, 0x01E56E12139A7FA6B9457E18C75029C0),
    U256::new(0x8FCF41511303A341F23F50FE5159E3B9, 0x01EEEF21E149148B9C11E2732B9F384E),
    U256::new(0xF590A3767F35D6242236DFF15F7CB136, 0x01F89FD49FAB216814F46F327D642889),
    U256::new(0x9B767F093152E5E31DDE4749978073E1, 0x0101408C88FC7A93E36F635B539BD750),
    U256::new(0x97E463E96F32D6E4F059889E56C056C4, 0x010649F15411AFA822198D0CD8BAD365),
    U256::new(0x471535F9B79281CDF304592EC5347498, 0x010B6C94CB20EECC1CFFC568611B97E3),
    U256::new(0xC83E230A5441DA678BECD9F9E85A912D, 0x0110A8F5763B1CB7B23AE7DE7D558792),
    U256::new(0x8E637C29040299B5E0C61275A1955B60, 0x0115FF9457A3F10A923C6852363DEACD),
    U256::new(0x03424D865FE91057D156A1ED2090E71D, 0x011B70F4F83CADB0E73D2707AE7A90D1),
    U256::new(0x348F41C2BBF8F30D71CAFCCB2865614E, 0x0120FD9D742D129367398BDCA32C5802),
    U256::new(0x87A39776FA00B4EDA714DFF2A0B33F15, 0x0126A61687CBC5825282680F9FDD592E),
    U256::new(0x6EAD4620C44F70EE0DA9CD6DD08EAA19, 0x012C6AEB9CC76C665AFDF4FA53889C23),
    U256::new(0xDF6D3E034C83B45485B06B9216130844, 0x01324CAAD791BDFC86B50910B2C8BA38),
    U256::new(0x3E0F29FABCB4A3585F3615CE78409D9A, 0x01384BE5250DD3BB6CA3DBD512F668C0),
    U256::new(0x3E656E20A44744E6CA6260909F614C3B, 0x013E692E48830DF9496A0011B24A53D2),
    U256::new(0xB2BD32FD3E8BAF12FB19A06CAA7E7143, 0x0144A51CE9D5E203F9E13CF017990471),
    U256::new(0xCB41D5E7EC5B82EEF9C3F16876116BA1, 0x014B004AA407F0968E74B0510D2E0342),
    U256::new(0x9CAF0DE724FD62B7AA78FEC5C62A9F4E, 0x01517B541400C9F489164634E1D6A889),
    U256::new(0x49087FBBA218E00D703D78494339AE14, 0x015816D8E7A0CBF199F437BC3E8E6AAD),
    U256::new(0xAA01B6FB233626D8D08D6D55C699FA4D, 0x015ED37BED1F8D4E80EE61C00843B49A),
    U256::new(0x28C381DBAAD77967D0389DB9707F8989, 0x0165B1E322B751194AFF2B396E04653A),
    U256::new(0xCF398762AD36264B488519081A48E705, 0x016CB2B7C69F042926818740E2441EAA),
    U256::new(0xA77DFE24501AB42CED7D705CE68F0FD8, 0x0173D6A667544E5D3623891A057064D7),
    U256::new(0x3769297992DAA7C938604693C25E8B8E, 0x017B1E5EF43748FADAACCECA8C37A5EC),
    U256::new(0xA4862711D8D158F44CAE09D7EBE2D28D, 0x01828A94CE7973639D7112031C9EDD34),
    U256::new(0x3E265A063F83A3FD80B4608622CD5F36, 0x018A1BFEDA61875DF9F0A667529090CB),
    U256::new(0x7BF110931480440CAEEAE7A967FFC974, 0x0191D35790E5D657823435D5CF9F153A),
    U256::new(0x13939F33006B522CC96BD5DEE882A23D, 0x0199B15D119EE15B0825C53E13B20C2C),
    U256::new(0x6B18A7CF7DD948AF1EE75DA9E3211E9A, 0x01A1B6D13513E5F363BEEC028AF94416),
    U256::new(0x209293A1284970EC4CB5B7AAAD2DC39B, 0x01A9E4799F6322DBEB97B9A05E4798ED),
    U256::new(0xF53701559036A0EC547EA0199E9D406B, 0x01B23B1FD347A0339888513BA436B13A),
    U256::new(0x2F1213C8494225479A26994CF4CF3709, 0x01BABB91457E4FE7EF2B54231D83A106),
    U256::new(0xF6028688CC142EB86DD13C79EE67B3FE, 0x01C3669F708C643A08E589A595AE7614),
    U256::new(0xDA16222C14DDB6BEAED181458D805B5D, 0x01CC3D1FE8E8C39B53C41511E2269F20),
    U256::new(0x3B542759743CAA23EA8FF4A920CE82AC, 0x01D53FEC718A8AA9C38F923AB8683DA7),
    U256::new(0xD957C6692D5FEC53686CA8C1DB224E38, 0x01DE6FE310DE96CD21ECB3DBC42B348B),
    U256::new(0x5E6A1D22BEE0AB6371C997E9598FF746, 0x01E7CDE626261DE1DEF1B28D7572A970),
    U256::new(0xD3E9A9A64046F3053DCD25599BF4B7B0, 0x01F15ADC7F40617A2B93628E9B1F1384),
    U256::new(0x29D0F1DB6CE0E584DBD940031D4771A3, 0x01FB17B16EE1968D3CD63A4E8A681CF6),
    U256::new(0x4402A3B9AF4A6911879CBFD9293570F9, 0x010282AA719C9277ABE45CA05F9BA979),
    U256::new(0x19CEA5EA785F1F4D82BC2E63F7FF1806, 0x0107925DBE84B6525AF82E6BF8770279),
    U256::new(0x1FBE1FA4005FED67476AA4205D507E8F, 0x010CBB6F5399A5073C06CEA0151D342F),
    U256::new(0x74E364ADD9B2A88698ECA0F75FC01D90, 0x0111FE5E575BCE8A639358A08EBC4A52),
    U256::new(0x39586EDE5168BCB598BC40EB7451346C, 0x01175BAC6D9891668210F365CBEDDD16),
    U256::new(0x6F6FEF0DA29AB02E7B570FB0BCC623D0, 0x011CD3DDC3E47E57CA5E678CA57A25F5),
    U256::new(0xAE6BB8483033BCE304FFDB36D1AEE4AB, 0x012267791E54261FCB5AD4C61151D16A),
    U256::new(0x41CA827B28282854AAE515CE5133A97A, 0x01281707E474AB08553B7548CBDFC283),
    U256::new(0x6E30DDE587359682061EEE8028A48DF7, 0x012DE3162E8555AEA311193565F8B668),
    U256::new(0x7F7ECDACD9869E032FB1761F7443078D, 0x0133CC32D2F372F1E374010C8CE3A20A),
    U256::new(0xD4DF55865AB3983EBB36E3DA59D6F21C, 0x0139D2EF7419C7417AC3AB3A80555C9F),
    U256::new(0x0232905F41588ACD394154DABCC73239, 0x013FF7E08E44EA0893007839B0C8066F),
    U256::new(0x2120154785E05593A92B53293C09717F, 0x01463B9D85FDE2966145142A2E4B4ABC),
    U256::new(0x277B1D9F247A477D80759F292DB5BC19, 0x014C9EC0B69C66A59AB708A55E4605FC),
    U256::new(0x27BDC2C55142490AA0C40884BA56B1D0, 0x015321E78122218A890570995790517F),
    U256::new(0x1ACDF443099DC170C212344CB1C0C73E, 0x0159C5B25B607216B31A53BAA245C84F),
    U256::new(0x8DBDA2F384DB3570510159B4226648EB, 0x01608AC4DF6A146BCEB1F1FBC058074D),
];

/// `5^(-k*56)` normalized to 249 significant bits (biased by -1; see
/// `pow5::compute_inv_pow5`), for `k` in `0..89`.
#[rustfmt::skip]
pub(crate) const POW5_INV_SPLIT: [U256; 89] = [
    U256::new(0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF, 0x03FFFFFFFFFFFFFFFFFFFFFFFFFFFFFF),
    U256::new(0x4AB0B93C58B3EB502BAEF1D680ED3583, 0x03EC56164AF81A34BBBB5B8BC3C3559C),
    U256::new(0x56A825407565529567B866FE9A51FE38, 0x03D90CD6F3C1974DF535185ED7FD285B),
    U256::new(0x07E03CD85D1CC328D3620606AB4675D1, 0x03C62266C6F0FE328771139B0F2C9E6B),
    U256::new(0xA11826B171E26728DA6F6FF084983746, 0x03B394F3B128C53AF693E2FD58D49190),
    U256::new(0xA3E443E7D9208CBC51A901823F84379F, 0x03A162B4923D708B2746CD003E3E73FD),
    U256::new(0x94D8EC7CB15A370F89D133A666FFB484, 0x038F89E911363662DFF46C6C8C205A6C),
    U256::new(0x362FDDF52F166CD6C75FAF186E9DEA79, 0x037E08D97125ED514F2CA173ACBFB410),
    U256::new(0xF09C9B122A14E27E9D7229771975D168, 0x036CDDD666D81D091213198F3B9AE1B9),
    U256::new(0x7E84590268BF7C7A7B4E811E67911CEB, 0x035C0738EF4E1EFD1F195341C9C79B0E),
    U256::new(0x39CB6CEF056C31C0536BCB7B00FB030C, 0x034B836227084FF583802EB637F03632),
    U256::new(0xEF00ACC0AA24AE07711F7DE2AE7A4A25, 0x033B50BB2217676EFAA157849C44F221),
    U256::new(0x6B09BFEE3A054C9C964B05EB2CB42357, 0x032B6DB4C4F21CDBF0BFFFC4A26A0131),
    U256::new(0xA01A73E3D474B97995808F23E85F5EC4, 0x031BD8C79E0B55C25AC1583091BE43A7),
    U256::new(0x45B58340BAB18C27BB31DD7232DB7876, 0x030C9073C0252A39C23968B9445AEBC6),
    U256::new(0x5C7ED81A7E2C9BE101468D28F99D1213, 0x02FD93409D5D1F79C2495893035F64CC),
    U256::new(0x340379CF6756F9A5D09DB8FC3D9FC154, 0x02EEDFBCE2EE09FCB5B52A96D42ED770),
    U256::new(0x25B8CF373690D9C9DB13968BE193100E, 0x02E0747E55A41A363893495B1502940C),
    U256::new(0x58DCE7C56C1AB0F1DBDC885D06C8873D, 0x02D25021AEFFA8030ED392F96D9157BE),
    U256::new(0xB5B4A0BF86DC44A1E7F4D273C02E8782, 0x02C4714A7B0361C9A31BC1D712E07F1C),
    U256::new(0x94A18AC7D87593770DF6C6CFE38403AD, 0x02B6D6A2F6AA94C14584D8DA1A586907),
    U256::new(0x9EA097CCAF23DAC203BC58F7CBEA5BA6, 0x02A97EDBEF0454042E142C3165DAC840),
    U256::new(0xC5BD960ED6CDB5509918ED2AD2F51E3D, 0x029C68ACA0F053EE9A0033EAE03138BA),
    U256::new(0x9DAFCFBA9BD9868CABC34033B276BDD1, 0x028F92D2997A5EDDABEB4AF859E5D97C),
    U256::new(0x20A08B8E3EBDD2C9B98F77EDA3E5C6C3, 0x0282FC1196D157A485B87DFC590BAEAB),
    U256::new(0x5FCDB46B5DE6E438273885100D517F5A, 0x0276A33369D6CD06D69716357E4691DB),
    U256::new(0x3B905762C95A50942943DFDF04C466AB, 0x026A8707D8443037423E215FA1D79DDD),
    U256::new(0x6E6D848AA8ADCA84F3EEBC0ED22A5969, 0x025EA6647F62CEBF00E1E2629B88BE08),
    U256::new(0xA19347C5768B051AC7F0137DE0D22290, 0x02530024B753BE54450F3DC75713F5E1),
    U256::new(0xFA2D9923A50779DE6F2361A7B5586BC7, 0x0247932976E4F6FFB159C0219AE1755F),
    U256::new(0x017C1F8784025F51FDEC398DD72A31DF, 0x023C5E5937F0E587C905B5FE6AC799D6),
    U256::new(0x3780805C5D6FC1031A4BB9FF391D11E7, 0x0231609FDC45CD6D1B60BBCA1809CF7A),
    U256::new(0xD302639BB42FEF5BDAD8964CA471DA24, 0x022698EE93125ED439B20EB44983FC83),
    U256::new(0x511A73F4B9B28CA9DE002C784D27FBC9, 0x021C063BBED4F18C95A44E1166C3E9CB),
    U256::new(0x2F9F7C1AF184FF6886E174E4151962CD, 0x0211A782DBCAE2F66DA889243A3A7B26),
    U256::new(0x1186236E06B239DD7712F95B20CD244D, 0x02077BC466DDA0DF23E9C2E68B2982C0),
    U256::new(0x47AA090AC00C3929465627D18DE9432E, 0x03FB040B8A15EF07E5B195B0EC7CB276),
    U256::new(0x9C8F2E7A77E4CC7F9321C030441C6903, 0x03E772A2568C89902459B057D159E1B0),
    U256::new(0x31E5B42A048200544CBF2F237E528755, 0x03D4416B0DA07C9C597E0E16CEA20BFD),
    U256::new(0x7BAC841BD0D7DF87576E5E62375ADDDB, 0x03C16E8CCC06071D4333EC730BBC7D13),
    U256::new(0x68333048A4FC75E963A317D698FF43EF, 0x03AEF837C320806B144C5596F8CF76A4),
    U256::new(0x59DDF26CB7EFB781E75133A664EF1984, 0x039CDCA50C5E5C1BF0A825A6FE219E4E),
    U256::new(0x7275DBBBCB0550F9962E408C2CD02727, 0x038B1A167D70A108C10C642D48FE1CAE),
    U256::new(0x4F83B91F010727783CA7DD83BC457CA0, 0x0379AED67D599CB36A30467CDA008490),
    U256::new(0x2274670D07D7D0BCAA83C1D994BDA6B4, 0x03689937DA4EB0F8C1D0AAE3CE19158B),
    U256::new(0x1B2E3B6BA068A5621E847B6F35977461, 0x0357D795A0692E4A14F4939A370409C9),
    U256::new(0xE3261E7F10A1A7D842E890C76217CADF, 0x03476852F1224097A8DCD9CC2A791FFB),
    U256::new(0x2E32888C156066BD534F9FEEDC900E93, 0x033749DADB9608A13F5BA8EDCCC0A7BC),
    U256::new(0xFE7ED5D811AACD4061080CBE7E5C6FF0, 0x03277AA0358A0E8D311D2CF2C7F875A9),
    U256::new(0x6E1829D52252E682F2B5744620F304C0, 0x0317F91D75334D73FD19A19DF57D1B0A),
    U256::new(0x91D644C24908326CD56DE5DD49545AFF, 0x0308C3D48BB829FF0B3F051EB79210E8),
    U256::new(0x5FED36510208ABD149411C239C62D2D9, 0x02F9D94EC06AB84F97BE1332672D3174),
    U256::new(0x58D66A3E834052E69E21F7B7941FCAD8, 0x02EB381C8CB7C72009F1319745718531),
    U256::new(0xAAB11A9ECFCAD2CD38750BE9A2C4AF6C, 0x02DCDED578C7377812A423F52A21CA2D),
    U256::new(0x351F26C5ABFA3F7DD3B0F9397F1AC0D8, 0x02CECC17F8CA395C7E4B86F07EECCFC6),
    U256::new(0x25C410DA49252A9D0C6B6B6BBB7DF5A6, 0x02C0FE894AF416A054F2969D5036755B),
    U256::new(0x44716BCEF534B182D5AE754E3064B3EC, 0x02B374D5561A456747B10705E4F5A743),
    U256::new(0x5CEB7CC3FCBAC58F538CBD782038DAD2, 0x02A62DAE88F88C031ED2CE776776E34C),
    U256::new(0xDBCDA68471BD9B016A3190FB8C1EFFFB, 0x029927CDBA160FA069356CCBDC4F5FD1),
    U256::new(0x9C2094718078D1915903B6015ABDDAB1, 0x028C61F2084836B399D0071BC247E1DC),
    U256::new(0x3DE919A9D6F9CF6C8419E2740E1A5C50, 0x027FDAE0BBD0574889836F62A910ED58),
    U256::new(0xF74F79583B8D008AC9246AE9237F038D, 0x027391652811383C6F76B6E015DEE41A),
    U256::new(0xE1CBA4FF83339F3F64C83867E23C4586, 0x026784508DD97B07408611C1BA91A930),
    U256::new(0x84EF61D51D8EF6F28694FD6543BB0877, 0x025BB279FE40120E6EB1CFC089BBFD7A),
    U256::new(0x1917BEC17C833D22CE60AD93A54EB138, 0x02501ABE3E0FF589952D378D383AF0F8),
    U256::new(0xF85E241875C5F515327E81C87999E46B, 0x0244BBFFA9C056CB170461FE83062B6E),
    U256::new(0x44A4BE3CB2635FD132F5655A3BF6E6FF, 0x0239952619F69F44690153D4D80927AF),
    U256::new(0x8B796F515CB096A0C2D82D5C592B4A04, 0x022EA51EC88F95E0F8B21FC62CE51E2A),
    U256::new(0xD91299A9B5BF594DEC2F70319E8881A1, 0x0223EADC362D1254A8FC7E4FC650F2A6),
    U256::new(0x54885D9A465EB054131A835929C485CA, 0x021965561045B2BCF10942F8BBAEA1F4),
    U256::new(0x6C5585F68086E27E4BE64FC637803722, 0x020F138917B4147706DE0B6C7F1AAE92),
    U256::new(0x8493FB65421EE401BBFDAAB99A696836, 0x0204F47707C31D535806C08DE29016D0),
    U256::new(0xCD20C9389D4DDB7F767AE4A5B315D276, 0x03F60E4CFB69DCB02D414BA4A27C3C8C),
    U256::new(0x12B8586490434C4D7B47D18A0C5AC571, 0x03E29545C1844A25F109A2953DC2F4A3),
    U256::new(0x2AFB119BB86D618D0A8EEAA130126D4A, 0x03CF7BF8951E381D283A17F1FD3B6F4F),
    U256::new(0xE1E724F3FC47C24C64C2410F44AAD6C2, 0x03BCC08EE029CCB64FD69E003C8FBD9E),
    U256::new(0x0861D1BF31A86436E6E4E25E9B3D74F9, 0x03AA613B15F79A7C4D9BA12494F97683),
    U256::new(0x58D8490EA12D555D3695C0FD739E9867, 0x03985C3886CA44115C096A387976ED07),
    U256::new(0x16C67F623F8A16CEF187351956FD9349, 0x0386AFCB34448198404544941A07565C),
    U256::new(0xD53E86183022A1648DF911F6CC063FEF, 0x03755A3FA6AD564D12C5F361B9FF3B39),
    U256::new(0x2FCA4058CD43B2CFAF6B765917CD832D, 0x036459EAC306595E62A3B7FF733F936D),
    U256::new(0x21147A15762B3BE0D5F991406FA56B5D, 0x0353AD29A1F0094FA2798079C1E8B0D2),
    U256::new(0x0FBA85CF687C3ADED150654283F70AD3, 0x03435261675835028F3EB7DACAA9F13D),
    U256::new(0x239063A485F3A0DD55522C7A02A53CD0, 0x033347FF1AEE98F8860078E118C60FF2),
    U256::new(0xB896C1065D97F7F36F92DD6B89EFB142, 0x03238C77815BE27064245559362AC15F),
    U256::new(0xA5719EE961A031333BFC90B15A6F07D4, 0x03141E46F6375CBB6CF157CFE51FFBC3),
    U256::new(0x2138F30E0FAA85EDEC0CCF54433C9F96, 0x0304FBF146B79F7D93817F9081F28F54),
    U256::new(0xF67C59700E7AB5B5DE8B48F15F3FAEE7, 0x02F624018D1AA68D362089FF7F04EAD4),
    U256::new(0x8DCE9CE02AEA129AC7686CF0F74E2256, 0x02E7950A0CC1CDCD8AF76CB7F78FE29B),
];

/// 2-bit correction per index `i` in `0..=4968`, packed 32 per word.
#[rustfmt::skip]
pub(crate) const POW5_ERRORS: [u64; 156] = [
    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x9555596400000000, 0x65A6569525565555, 0x4415551445449655, 0x5105015504144541, 0x65A69969A6965964,
    0x5054955969959656, 0x5105154515554145, 0x4055511051591555, 0x5500514455550115, 0x0041140014145515, 0x1005440545511051, 0x0014405450411004, 0x0414440010500000,
    0x0044000440010040, 0x5551155000004001, 0x4554555454544114, 0x5150045544005441, 0x0001111400054501, 0x6550955555554554, 0x1504159645559559, 0x4105055141454545,
    0x1411541410405454, 0x0415555044545555, 0x0014154115405550, 0x1540055040411445, 0x0000000500000000, 0x5644000000000000, 0x1155555591596555, 0x0410440054569565,
    0x5145100010010005, 0x0555041405500150, 0x4141450455140450, 0x0000000144000140, 0x5114004001105410, 0x4444100404005504, 0x0414014410001015, 0x5145055155555015,
    0x0141041444445540, 0x0000100451541414, 0x4105041104155550, 0x0500501150451145, 0x1001050000004114, 0x5551504400141045, 0x5110545410151454, 0x0100001400004040,
    0x5040010111040000, 0x0140000150541100, 0x4400140400104110, 0x5011014405545004, 0x0000000044155440, 0x0000000010000000, 0x1100401444440001, 0x0040401010055111,
    0x5155155551405454, 0x0444440015514411, 0x0054505054014101, 0x0451015441115511, 0x1541411401140551, 0x4155104514445110, 0x4141145450145515, 0x5451445055155050,
    0x4400515554110054, 0x5111145104501151, 0x565A655455500501, 0x5565555555525955, 0x0550511500405695, 0x4415504051054544, 0x6555595965555554, 0x0100915915555655,
    0x5540001510001001, 0x5450051414000544, 0x1405010555555551, 0x5555515555644155, 0x5555055595496555, 0x5451045004415000, 0x5450510144040144, 0x5554155555556455,
    0x5051555495415555, 0x5555554555555545, 0x0000000010005455, 0x4000005000040000, 0x5565555555555954, 0x5554559555555505, 0x9645545495552555, 0x4000400055955564,
    0x0040000000000001, 0x4004100100000000, 0x5540040440000411, 0x4565555955545644, 0x1140659549651556, 0x0100000410010000, 0x5555515400004001, 0x5955545555155255,
    0x5151055545505556, 0x5051454510554515, 0x0501500050415554, 0x5044154005441005, 0x1455445450550455, 0x0010144055144545, 0x0000401100000004, 0x1050145050000010,
    0x0415004554011540, 0x1000510100151150, 0x0100040400001144, 0x0000000000000000, 0x0550004400000100, 0x0151145041451151, 0x0000400400005450, 0x0000100044010004,
    0x0100054100050040, 0x0504400005410010, 0x4011410445500105, 0x0000404000144411, 0x0101504404500000, 0x0000005044400400, 0x0000000014000100, 0x0404440414000000,
    0x5554100410000140, 0x4555455544505555, 0x5454105055455455, 0x0115454155454015, 0x4404110000045100, 0x4400001100101501, 0x6596955956966A94, 0x0040655955665965,
    0x5554144400100155, 0xA549495401011041, 0x5596555565955555, 0x5569965959549555, 0x969565A655555456, 0x0000001000000000, 0x0000000040000140, 0x0000040100000000,
    0x1415454400000000, 0x5410415411454114, 0x0400040104000154, 0x0504045000000411, 0x0000001000000010, 0x5554000000001040, 0x5549155551556595, 0x1455541055515555,
    0x0510555454554541, 0x9555555555540455, 0x6455456555556465, 0x4524565555654514, 0x5554655255559545, 0x9555455441155556, 0x0000000051515555, 0x0010005040000550,
    0x5044044040000000, 0x1045040440010500, 0x0000400000040000, 0x0000000000000000,
];

/// 2-bit correction per index `i` in `0..=4897`, packed 32 per word.
#[rustfmt::skip]
pub(crate) const POW5_INV_ERRORS: [u64; 154] = [
    0x1544144015510114, 0x0000440405405044, 0x0000000000000000, 0x1000040000000000, 0x0400001005540404, 0x1041505515540110, 0x5451411514511541, 0x1150014141555004,
    0x5544010040144155, 0x4555544555414555, 0x1415500045551515, 0x1515400511140015, 0x5544141510505001, 0x0551544000501101, 0x0100001100000000, 0x4040000005400000,
    0x0455410454504015, 0x4154155404144005, 0x5151155545151555, 0x1555555551441554, 0x5558545555515555, 0x0001000000400010, 0x5554000100000050, 0x1455555114504115,
    0x5555545445555555, 0x5055101545455551, 0x1455555555545514, 0x5154505155555545, 0x6595555455555450, 0x5540555555515555, 0x4515155154155145, 0x5111110055455550,
    0x5000454404055115, 0x0000000000004415, 0x0000400100000000, 0x0000000014010000, 0x1454000000000004, 0x0114141511400505, 0x0000000000440050, 0x0000000000010004,
    0x0000100000000000, 0x0000000004540011, 0x1000000000000000, 0x1510000000100000, 0x5051445555541051, 0x1141051445455555, 0x4145414555554055, 0x0000404011000555,
    0x0140105401051000, 0x0454410104014000, 0x0104501145005044, 0x1054015141541155, 0x1404441455414055, 0x5101150044000100, 0x1114455551145000, 0x0110151414551551,
    0x4001000044004100, 0x4114011000000001, 0x5141551555555555, 0x5555555410155545, 0x5558514519505586, 0x50450545405055A1, 0x5511410511151554, 0x1145005505414110,
    0x0004441505455145, 0x0400401400010000, 0x0401401400000000, 0x5404141551440551, 0x4141114150044511, 0x0000110004004000, 0x5001400000151550, 0x0510050444041140,
    0x0000540500014505, 0x0410054000400000, 0x5541545145101100, 0x0100000150000145, 0x0000004014100000, 0x0000000040000000, 0x4010000000040004, 0x0010001004000050,
    0x4504000004004040, 0x1551054040514150, 0x0000004110005505, 0x0000100044000010, 0x5151111555401154, 0x1514055455550411, 0x1554515554555544, 0x0154144441551505,
    0x0541045455511505, 0x0150450111505514, 0x1544045441540404, 0x1114445015055450, 0x4400051404455414, 0x0114411105001155, 0x1405410015500001, 0x4515414151040411,
    0x1414115401005014, 0x0145011551501110, 0x5555556561465954, 0x0000455555655559, 0x0000401040040040, 0x0004000001000000, 0x0000001000000100, 0x5655514515140000,
    0x1146151551155465, 0x5554515515551154, 0x1554555555555515, 0x9656555546556591, 0x0014001055551555, 0x0000000000040100, 0x5555551155041001, 0x1545454150555555,
    0x1510040150040400, 0x5614004145000004, 0x5555555551545555, 0x0555550051551455, 0x0115515514015555, 0x555A596699581545, 0x6555A55955956955, 0x5555555558555658,
    0x5414555595646555, 0x1544040055551455, 0x1010010040115045, 0x0410054051044450, 0x5041104515040100, 0x4541111554540515, 0x1514111554500554, 0x1454545055501545,
    0x5011555451550454, 0x5455540414515544, 0x5011515150451015, 0x0444010005501540, 0x0110410404044000, 0x5545544145114044, 0x4544151405415155, 0x0001040404000440,
    0x4154104000400401, 0x4441451005510141, 0x0014404041001010, 0x0400444040404044, 0x4154145144541014, 0x1000141515501150, 0x0414104040054014, 0x4544515051100510,
    0x5555050441054550, 0x5565555555401155, 0x5554614555545555, 0x6145451145551550, 0x1010515951555555, 0x0414545554514541, 0x4415545445044444, 0x5455155511415555,
    0x0040000400105555, 0x0000000000000001,
];
